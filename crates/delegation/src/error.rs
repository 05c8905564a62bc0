//! Delegation list error types.

use ndn_tlv::TlvError;
use thiserror::Error;

/// The caller asked for something the API does not support.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("unexpected TLV-TYPE {0} while encoding delegation list")]
    InvalidTlvType(u32),
    #[error("unknown insert conflict resolution {0:?}")]
    UnknownConflictResolution(String),
}

/// The wire data does not describe a valid delegation list.
///
/// Variants that wrap a [`TlvError`] expose it through
/// [`std::error::Error::source`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("unexpected TLV-TYPE {0} while decoding delegation list")]
    UnexpectedListType(u32),
    #[error("unexpected TLV-TYPE {0} while decoding Delegation")]
    UnexpectedDelegationType(u32),
    #[error("malformed TLV in delegation list")]
    Malformed(#[source] TlvError),
    #[error("missing Preference field in Delegation")]
    MissingPreference,
    #[error("invalid Preference field in Delegation")]
    InvalidPreference(#[source] TlvError),
    #[error("missing Name field in Delegation")]
    MissingName,
    #[error("invalid Name field in Delegation")]
    InvalidName(#[source] TlvError),
    #[error("empty delegation list")]
    EmptyList,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Usage(#[from] UsageError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("index {index} out of range for delegation list of length {len}")]
    OutOfRange { index: usize, len: usize },
}
