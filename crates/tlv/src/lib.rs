//! NDN Type-Length-Value primitives.
//!
//! - [`var_number`] — the VAR-NUMBER form used for TLV-TYPE and TLV-LENGTH
//! - [`non_negative_integer`] — 1/2/4/8-byte big-endian integers
//! - [`Block`] — an owned TLV element with on-demand child parsing
//! - [`Name`] / [`Component`] — hierarchical names
//!
//! Encoders are generic over [`ndn_buffers::Encoder`], so every routine that
//! writes bytes can also be run against an estimator to size a buffer first.

pub mod constants;
pub mod non_negative_integer;
pub mod var_number;

mod block;
mod error;
mod name;

pub use block::Block;
pub use error::TlvError;
pub use name::{Component, Name};
pub use non_negative_integer::{
    prepend_non_negative_integer_block, read_non_negative_integer,
};
pub use var_number::prepend_var_number;
