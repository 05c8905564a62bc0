//! VAR-NUMBER codec used for TLV-TYPE and TLV-LENGTH.
//!
//! | first byte | following bytes           |
//! |------------|---------------------------|
//! | `0..=252`  | none, the byte is the value |
//! | `253`      | u16, big-endian           |
//! | `254`      | u32, big-endian           |
//! | `255`      | u64, big-endian           |

use ndn_buffers::{Encoder, Reader};

use crate::TlvError;

/// Number of bytes [`prepend_var_number`] writes for `num`.
pub fn var_number_size(num: u64) -> usize {
    if num < 253 {
        1
    } else if num <= u16::MAX as u64 {
        3
    } else if num <= u32::MAX as u64 {
        5
    } else {
        9
    }
}

/// Prepends `num` as a VAR-NUMBER and returns the bytes written.
pub fn prepend_var_number<E: Encoder + ?Sized>(encoder: &mut E, num: u64) -> usize {
    if num < 253 {
        encoder.prepend_byte(num as u8)
    } else if num <= u16::MAX as u64 {
        encoder.prepend_bytes(&(num as u16).to_be_bytes());
        encoder.prepend_byte(253);
        3
    } else if num <= u32::MAX as u64 {
        encoder.prepend_bytes(&(num as u32).to_be_bytes());
        encoder.prepend_byte(254);
        5
    } else {
        encoder.prepend_bytes(&num.to_be_bytes());
        encoder.prepend_byte(255);
        9
    }
}

pub fn read_var_number(reader: &mut Reader<'_>) -> Result<u64, TlvError> {
    let first = reader.u8()?;
    let num = match first {
        253 => reader.u16()? as u64,
        254 => reader.u32()? as u64,
        255 => reader.u64()?,
        n => n as u64,
    };
    Ok(num)
}

/// Reads a TLV-TYPE, which must be in `1..=u32::MAX`.
pub fn read_type(reader: &mut Reader<'_>) -> Result<u32, TlvError> {
    let typ = read_var_number(reader)?;
    if typ == 0 || typ > u32::MAX as u64 {
        return Err(TlvError::InvalidType(typ));
    }
    Ok(typ as u32)
}
