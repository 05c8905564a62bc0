//! [`Block`] — one owned TLV element.

use ndn_buffers::{Encoder, EncodingBuffer, Reader};

use crate::var_number::{prepend_var_number, read_type, read_var_number, var_number_size};
use crate::TlvError;

/// A TLV element: its type number plus the complete wire encoding.
///
/// Children are not parsed eagerly; call [`Block::elements`] to split the
/// value into nested elements.
///
/// # Example
///
/// ```
/// use ndn_tlv::Block;
///
/// let block = Block::new(21, b"hi");
/// assert_eq!(block.wire(), [21, 2, b'h', b'i']);
///
/// let back = Block::decode(block.wire()).unwrap();
/// assert_eq!(back.tlv_type(), 21);
/// assert_eq!(back.value(), b"hi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Block {
    typ: u32,
    wire: Vec<u8>,
    value_offset: usize,
}

impl Block {
    /// Builds an element of type `typ` around `value`.
    pub fn new(typ: u32, value: &[u8]) -> Self {
        let header = var_number_size(typ as u64) + var_number_size(value.len() as u64);
        let mut buf = EncodingBuffer::with_capacity(header + value.len());
        buf.prepend_bytes(value);
        prepend_var_number(&mut buf, value.len() as u64);
        prepend_var_number(&mut buf, typ as u64);
        Self {
            typ,
            wire: buf.into_vec(),
            value_offset: header,
        }
    }

    /// Decodes the first element of `input`, returning it with the number of
    /// bytes it occupied.
    pub fn read(input: &[u8]) -> Result<(Self, usize), TlvError> {
        let mut reader = Reader::new(input);
        let typ = read_type(&mut reader)?;
        let length = read_var_number(&mut reader)?;
        let remaining = reader.size();
        if length > remaining as u64 {
            return Err(TlvError::LengthExceedsInput { length, remaining });
        }
        let value_offset = reader.position();
        let end = value_offset + length as usize;
        let block = Self {
            typ,
            wire: input[..end].to_vec(),
            value_offset,
        };
        Ok((block, end))
    }

    /// Decodes `input`, which must hold exactly one element.
    pub fn decode(input: &[u8]) -> Result<Self, TlvError> {
        let (block, used) = Self::read(input)?;
        if used != input.len() {
            return Err(TlvError::TrailingBytes(input.len() - used));
        }
        Ok(block)
    }

    pub fn tlv_type(&self) -> u32 {
        self.typ
    }

    /// TLV-VALUE bytes.
    pub fn value(&self) -> &[u8] {
        &self.wire[self.value_offset..]
    }

    /// Full encoding: TLV-TYPE, TLV-LENGTH and TLV-VALUE.
    pub fn wire(&self) -> &[u8] {
        &self.wire
    }

    /// Size of the full encoding in bytes.
    pub fn size(&self) -> usize {
        self.wire.len()
    }

    pub fn into_wire(self) -> Vec<u8> {
        self.wire
    }

    /// Parses the value as a sequence of nested elements.
    pub fn elements(&self) -> Result<Vec<Block>, TlvError> {
        let mut rest = self.value();
        let mut elements = Vec::new();
        while !rest.is_empty() {
            let (element, used) = Self::read(rest)?;
            elements.push(element);
            rest = &rest[used..];
        }
        Ok(elements)
    }

    /// Prepends the whole element to `encoder`.
    pub fn wire_encode<E: Encoder + ?Sized>(&self, encoder: &mut E) -> usize {
        encoder.prepend_bytes(&self.wire)
    }
}
