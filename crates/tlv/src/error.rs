//! TLV codec error type.

use ndn_buffers::BufferError;
use thiserror::Error;

/// Error type for TLV framing, number and name decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TlvError {
    #[error(transparent)]
    Buffer(#[from] BufferError),
    #[error("TLV-TYPE {0} is out of range")]
    InvalidType(u64),
    #[error("TLV-LENGTH {length} exceeds the {remaining} remaining bytes")]
    LengthExceedsInput { length: u64, remaining: usize },
    #[error("{0} trailing bytes after TLV element")]
    TrailingBytes(usize),
    #[error("invalid length {0} for nonNegativeInteger")]
    InvalidNonNegativeIntegerLength(usize),
    #[error("expected TLV-TYPE {expected}, found {actual}")]
    UnexpectedType { expected: u32, actual: u32 },
    #[error("name component TLV-TYPE {0} is out of range")]
    InvalidComponentType(u32),
    #[error("invalid URI: {0}")]
    InvalidUri(String),
}
