//! Size-only [`Encoder`].

use crate::Encoder;

/// Counts the bytes an encode pass would produce without storing them.
///
/// # Example
///
/// ```
/// use ndn_buffers::{Encoder, EncodingEstimator};
///
/// let mut est = EncodingEstimator::new();
/// est.prepend_bytes(b"abc");
/// est.prepend_byte(3);
/// assert_eq!(est.size(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodingEstimator {
    size: usize,
}

impl EncodingEstimator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Encoder for EncodingEstimator {
    #[inline]
    fn prepend_byte(&mut self, _byte: u8) -> usize {
        self.size += 1;
        1
    }

    #[inline]
    fn prepend_bytes(&mut self, bytes: &[u8]) -> usize {
        self.size += bytes.len();
        bytes.len()
    }

    #[inline]
    fn size(&self) -> usize {
        self.size
    }
}
