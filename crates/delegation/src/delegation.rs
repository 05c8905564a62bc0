use std::fmt;

use ndn_tlv::Name;

/// One alternative destination: a name and how much it is preferred.
///
/// Lower preference values are more preferred. Delegations order by
/// preference, then by name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Delegation {
    preference: u64,
    name: Name,
}

impl Delegation {
    pub fn new(preference: u64, name: Name) -> Self {
        Self { preference, name }
    }

    pub fn preference(&self) -> u64 {
        self.preference
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn into_parts(self) -> (u64, Name) {
        (self.preference, self.name)
    }
}

impl From<(u64, Name)> for Delegation {
    fn from((preference, name): (u64, Name)) -> Self {
        Self::new(preference, name)
    }
}

impl fmt::Display for Delegation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.preference)
    }
}
