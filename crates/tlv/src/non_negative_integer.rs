//! nonNegativeInteger codec.
//!
//! The value is stored big-endian in 1, 2, 4 or 8 bytes; encoders pick the
//! shortest form that fits.

use ndn_buffers::Encoder;

use crate::var_number::prepend_var_number;
use crate::{Block, TlvError};

pub fn non_negative_integer_size(num: u64) -> usize {
    if num <= u8::MAX as u64 {
        1
    } else if num <= u16::MAX as u64 {
        2
    } else if num <= u32::MAX as u64 {
        4
    } else {
        8
    }
}

/// Prepends the bare integer (no TLV header).
pub fn prepend_non_negative_integer<E: Encoder + ?Sized>(encoder: &mut E, num: u64) -> usize {
    match non_negative_integer_size(num) {
        1 => encoder.prepend_byte(num as u8),
        2 => encoder.prepend_bytes(&(num as u16).to_be_bytes()),
        4 => encoder.prepend_bytes(&(num as u32).to_be_bytes()),
        _ => encoder.prepend_bytes(&num.to_be_bytes()),
    }
}

/// Prepends a complete `typ` element whose value is `num`.
pub fn prepend_non_negative_integer_block<E: Encoder + ?Sized>(
    encoder: &mut E,
    typ: u32,
    num: u64,
) -> usize {
    let mut len = prepend_non_negative_integer(encoder, num);
    len += prepend_var_number(encoder, len as u64);
    len += prepend_var_number(encoder, typ as u64);
    len
}

pub fn decode_non_negative_integer(value: &[u8]) -> Result<u64, TlvError> {
    let num = match *value {
        [b] => b as u64,
        [a, b] => u16::from_be_bytes([a, b]) as u64,
        [a, b, c, d] => u32::from_be_bytes([a, b, c, d]) as u64,
        [a, b, c, d, e, f, g, h] => u64::from_be_bytes([a, b, c, d, e, f, g, h]),
        _ => return Err(TlvError::InvalidNonNegativeIntegerLength(value.len())),
    };
    Ok(num)
}

/// Reads the value of `block` as a nonNegativeInteger, whatever its type.
pub fn read_non_negative_integer(block: &Block) -> Result<u64, TlvError> {
    decode_non_negative_integer(block.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndn_buffers::EncodingBuffer;

    fn encode_block(typ: u32, num: u64) -> Vec<u8> {
        let mut buf = EncodingBuffer::new();
        let n = prepend_non_negative_integer_block(&mut buf, typ, num);
        assert_eq!(n, buf.len());
        buf.into_vec()
    }

    #[test]
    fn test_shortest_encoding() {
        assert_eq!(encode_block(30, 0), [30, 1, 0]);
        assert_eq!(encode_block(30, 255), [30, 1, 0xff]);
        assert_eq!(encode_block(30, 256), [30, 2, 0x01, 0x00]);
        assert_eq!(encode_block(30, 65_536), [30, 4, 0x00, 0x01, 0x00, 0x00]);
        assert_eq!(
            encode_block(30, u64::MAX),
            [30, 8, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
        );
    }

    #[test]
    fn test_decode_accepts_non_minimal_widths() {
        assert_eq!(decode_non_negative_integer(&[0, 0, 0, 5]), Ok(5));
        assert_eq!(decode_non_negative_integer(&[0, 0, 0, 0, 0, 0, 1, 0]), Ok(256));
    }

    #[test]
    fn test_decode_rejects_bad_lengths() {
        for len in [0usize, 3, 5, 6, 7, 9] {
            let value = vec![1u8; len];
            assert_eq!(
                decode_non_negative_integer(&value),
                Err(TlvError::InvalidNonNegativeIntegerLength(len))
            );
        }
    }

    #[test]
    fn test_read_from_block() {
        let block = Block::decode(&encode_block(30, 1000)).unwrap();
        assert_eq!(read_non_negative_integer(&block), Ok(1000));
    }
}
