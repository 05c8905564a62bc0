//! The [`Encoder`] capability shared by the real buffer and the estimator.

/// A sink that TLV structures are written into back to front.
///
/// Every method returns the number of bytes it added, so encoders can sum
/// the lengths of nested elements while they prepend them. Implemented by
/// [`EncodingBuffer`](crate::EncodingBuffer), which stores the bytes, and by
/// [`EncodingEstimator`](crate::EncodingEstimator), which only counts them.
pub trait Encoder {
    /// Prepends a single byte.
    fn prepend_byte(&mut self, byte: u8) -> usize;

    /// Prepends a byte slice, keeping its order.
    fn prepend_bytes(&mut self, bytes: &[u8]) -> usize;

    /// Total number of bytes prepended so far.
    fn size(&self) -> usize;
}

impl<E: Encoder + ?Sized> Encoder for &mut E {
    #[inline]
    fn prepend_byte(&mut self, byte: u8) -> usize {
        (**self).prepend_byte(byte)
    }

    #[inline]
    fn prepend_bytes(&mut self, bytes: &[u8]) -> usize {
        (**self).prepend_bytes(bytes)
    }

    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }
}
