//! Byte buffers for NDN TLV codecs.
//!
//! TLV encoders in this workspace write back to front: the value of an
//! element is produced before its length is known. [`EncodingBuffer`] stores
//! the bytes, [`EncodingEstimator`] only counts them, and both implement the
//! [`Encoder`] trait so one encode routine serves both purposes. [`Reader`]
//! is the forward, bounds-checked counterpart used by decoders.

mod encoder;
mod encoding_buffer;
mod error;
mod estimator;
mod reader;

pub use encoder::Encoder;
pub use encoding_buffer::{EncodingBuffer, DEFAULT_CAPACITY};
pub use error::BufferError;
pub use estimator::EncodingEstimator;
pub use reader::Reader;
