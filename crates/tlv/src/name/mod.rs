//! Hierarchical names and their wire codec.

mod component;

use std::fmt;
use std::str::FromStr;

use ndn_buffers::Encoder;

pub use component::Component;

use crate::constants::NAME;
use crate::var_number::prepend_var_number;
use crate::{Block, TlvError};

/// An ordered sequence of [`Component`]s.
///
/// Names order component by component, and a proper prefix sorts before the
/// names it is a prefix of.
///
/// # Example
///
/// ```
/// use ndn_tlv::Name;
///
/// let name: Name = "/ndn/edu/ucla".parse().unwrap();
/// assert_eq!(name.len(), 3);
/// assert_eq!(name.to_string(), "/ndn/edu/ucla");
///
/// let prefix: Name = "/ndn".parse().unwrap();
/// assert!(prefix.is_prefix_of(&name));
/// assert!(prefix < name);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name {
    components: Vec<Component>,
}

impl Name {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_components(components: impl IntoIterator<Item = Component>) -> Self {
        Self {
            components: components.into_iter().collect(),
        }
    }

    /// Appends a component and returns `self` for chaining.
    pub fn push(&mut self, component: Component) -> &mut Self {
        self.components.push(component);
        self
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Component> {
        self.components.get(i)
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    pub fn is_prefix_of(&self, other: &Name) -> bool {
        other.components.starts_with(&self.components)
    }

    /// Prepends the Name TLV and returns the bytes written.
    pub fn wire_encode<E: Encoder + ?Sized>(&self, encoder: &mut E) -> usize {
        let mut len = 0;
        for component in self.components.iter().rev() {
            len += component.wire_encode(encoder);
        }
        len += prepend_var_number(encoder, len as u64);
        len += prepend_var_number(encoder, NAME as u64);
        len
    }

    pub fn wire_decode(block: &Block) -> Result<Self, TlvError> {
        if block.tlv_type() != NAME {
            return Err(TlvError::UnexpectedType {
                expected: NAME,
                actual: block.tlv_type(),
            });
        }
        let components = block
            .elements()?
            .iter()
            .map(Component::from_block)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { components })
    }
}

impl FromStr for Name {
    type Err = TlvError;

    /// Parses `/a/b/c`, optionally prefixed with `ndn:`. Query and fragment
    /// parts are dropped, empty segments are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut uri = s.trim();
        if let Some(end) = uri.find(|c: char| c == '?' || c == '#') {
            uri = &uri[..end];
        }
        if let Some(rest) = uri.strip_prefix("ndn:") {
            uri = rest;
        }
        let components = uri
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(Component::from_escaped)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { components })
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.components.is_empty() {
            return f.write_str("/");
        }
        for component in &self.components {
            write!(f, "/{component}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Name {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
