use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use ndn_buffers::Encoder;

use crate::constants::{GENERIC_NAME_COMPONENT, MAX_COMPONENT_TYPE};
use crate::var_number::prepend_var_number;
use crate::{Block, TlvError};

/// One segment of a [`Name`](crate::Name): a TLV-TYPE and opaque value.
///
/// Components order canonically: by TLV-TYPE, then by value length, then by
/// value bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component {
    typ: u32,
    value: Vec<u8>,
}

impl Component {
    pub fn new(typ: u32, value: impl Into<Vec<u8>>) -> Result<Self, TlvError> {
        if typ == 0 || typ > MAX_COMPONENT_TYPE {
            return Err(TlvError::InvalidComponentType(typ));
        }
        Ok(Self {
            typ,
            value: value.into(),
        })
    }

    /// A GenericNameComponent holding `value`.
    pub fn generic(value: impl Into<Vec<u8>>) -> Self {
        Self {
            typ: GENERIC_NAME_COMPONENT,
            value: value.into(),
        }
    }

    pub fn tlv_type(&self) -> u32 {
        self.typ
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn is_generic(&self) -> bool {
        self.typ == GENERIC_NAME_COMPONENT
    }

    pub fn from_block(block: &Block) -> Result<Self, TlvError> {
        Self::new(block.tlv_type(), block.value())
    }

    /// Parses the URI form of a single component (no slashes).
    ///
    /// `<digits>=<value>` selects a TLV-TYPE; everything else is generic.
    pub fn from_escaped(input: &str) -> Result<Self, TlvError> {
        let (typ, escaped) = match input.split_once('=') {
            Some((prefix, rest))
                if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) =>
            {
                let typ = prefix
                    .parse::<u32>()
                    .map_err(|_| TlvError::InvalidUri(format!("bad component type {prefix:?}")))?;
                (typ, rest)
            }
            _ => (GENERIC_NAME_COMPONENT, input),
        };

        let value = if !escaped.is_empty() && escaped.bytes().all(|b| b == b'.') {
            if escaped.len() < 3 {
                return Err(TlvError::InvalidUri(format!(
                    "component {escaped:?} must have at least three periods"
                )));
            }
            escaped.as_bytes()[3..].to_vec()
        } else {
            unescape(escaped)?
        };
        Self::new(typ, value)
    }

    /// Prepends the component TLV and returns the bytes written.
    pub fn wire_encode<E: Encoder + ?Sized>(&self, encoder: &mut E) -> usize {
        let mut len = encoder.prepend_bytes(&self.value);
        len += prepend_var_number(encoder, self.value.len() as u64);
        len += prepend_var_number(encoder, self.typ as u64);
        len
    }
}

impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        self.typ
            .cmp(&other.typ)
            .then_with(|| self.value.len().cmp(&other.value.len()))
            .then_with(|| self.value.cmp(&other.value))
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Component {
    type Err = TlvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_escaped(s)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_generic() {
            write!(f, "{}=", self.typ)?;
        }
        if self.value.iter().all(|&b| b == b'.') {
            f.write_str("...")?;
        }
        for &b in &self.value {
            if is_unreserved(b) {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "%{b:02X}")?;
            }
        }
        Ok(())
    }
}

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

fn unescape(input: &str) -> Result<Vec<u8>, TlvError> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes
                .get(i + 1..i + 3)
                .and_then(|h| std::str::from_utf8(h).ok())
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .ok_or_else(|| TlvError::InvalidUri(format!("bad percent escape in {input:?}")))?;
            out.push(hex);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    Ok(out)
}
