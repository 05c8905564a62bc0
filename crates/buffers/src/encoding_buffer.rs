//! Prepend-only binary buffer with auto-growing headroom.

use crate::Encoder;

/// Default headroom, the largest packet an NDN forwarder accepts.
pub const DEFAULT_CAPACITY: usize = 8800;

/// A binary buffer that is filled from the back towards the front.
///
/// TLV elements carry their length before their value, so the value is
/// written first and the header is prepended afterwards.
///
/// # Example
///
/// ```
/// use ndn_buffers::{Encoder, EncodingBuffer};
///
/// let mut buf = EncodingBuffer::new();
/// buf.prepend_bytes(&[0x02, 0x03]);
/// buf.prepend_byte(0x01);
/// assert_eq!(buf.as_slice(), [0x01, 0x02, 0x03]);
/// ```
#[derive(Debug, Clone)]
pub struct EncodingBuffer {
    /// The underlying byte buffer; written data occupies `uint8[x..]`.
    uint8: Vec<u8>,
    /// Start of the written data.
    x: usize,
    /// Allocation size when the buffer needs to grow.
    alloc_size: usize,
}

impl Default for EncodingBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl EncodingBuffer {
    /// Creates a buffer with [`DEFAULT_CAPACITY`] bytes of headroom.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a buffer with custom headroom.
    ///
    /// Pass the size reported by an [`EncodingEstimator`](crate::EncodingEstimator)
    /// to encode without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: vec![0u8; capacity],
            x: capacity,
            alloc_size: capacity.max(1),
        }
    }

    /// Ensures at least `capacity` bytes can be prepended without growing.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        if self.x < capacity {
            let written = self.len();
            let total_required = written + capacity;
            let new_size = if total_required <= self.alloc_size {
                self.alloc_size
            } else {
                total_required * 2
            };
            self.grow(new_size);
        }
    }

    fn grow(&mut self, new_size: usize) {
        let written = self.len();
        let mut new_buf = vec![0u8; new_size];
        new_buf[new_size - written..].copy_from_slice(&self.uint8[self.x..]);
        self.uint8 = new_buf;
        self.x = new_size - written;
    }

    /// Number of bytes written.
    pub fn len(&self) -> usize {
        self.uint8.len() - self.x
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Free space in front of the written data.
    pub fn headroom(&self) -> usize {
        self.x
    }

    /// View of the written bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.uint8[self.x..]
    }

    /// Discards the written bytes, keeping the allocation.
    pub fn reset(&mut self) {
        self.x = self.uint8.len();
    }

    /// Returns the written bytes and empties the buffer.
    pub fn flush(&mut self) -> Vec<u8> {
        let result = self.as_slice().to_vec();
        self.reset();
        result
    }

    /// Consumes the buffer, returning the written bytes.
    pub fn into_vec(mut self) -> Vec<u8> {
        if self.x == 0 {
            return self.uint8;
        }
        self.uint8.drain(..self.x);
        self.uint8
    }
}

impl Encoder for EncodingBuffer {
    #[inline]
    fn prepend_byte(&mut self, byte: u8) -> usize {
        self.ensure_capacity(1);
        self.x -= 1;
        self.uint8[self.x] = byte;
        1
    }

    fn prepend_bytes(&mut self, bytes: &[u8]) -> usize {
        let length = bytes.len();
        self.ensure_capacity(length);
        self.x -= length;
        self.uint8[self.x..self.x + length].copy_from_slice(bytes);
        length
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}
