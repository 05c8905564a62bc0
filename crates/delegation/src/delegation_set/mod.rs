//! [`DelegationSet`] — an ordered list of delegations with a TLV codec.
//!
//! Layout:
//! - this module: storage, ordering and mutation
//! - `encoder`: wire encoding, generic over [`ndn_buffers::Encoder`]
//! - `decoder`: wire decoding and validation

mod decoder;
mod encoder;

use std::fmt;
use std::ops::Index;

use ndn_tlv::constants::{CONTENT, FORWARDING_HINT};
use ndn_tlv::Name;
use tracing::trace;

use crate::{Delegation, Error, InsertConflictResolution};

/// A list of [`Delegation`]s, either kept sorted or kept in wire order.
///
/// Delegations are stored in a `Vec`: lists are expected to hold a handful of
/// entries, so shifting elements on insert and erase is cheap.
///
/// A sorted list is what most callers want. An unsorted list, produced by
/// decoding with `want_sort = false`, keeps the order in which delegations
/// appeared on the wire so the i-th entry of a received forwarding hint can
/// be inspected. New delegations are appended to the end of an unsorted list.
///
/// Equality compares contents in order: a sorted and an unsorted list with
/// the same delegations in a different order are not equal.
///
/// # Example
///
/// ```
/// use ndn_delegation::{DelegationSet, InsertConflictResolution};
///
/// let mut set = DelegationSet::new();
/// set.insert(20, "/b".parse().unwrap(), InsertConflictResolution::Replace);
/// set.insert(10, "/a".parse().unwrap(), InsertConflictResolution::Replace);
/// assert_eq!(set.to_string(), "[/a(10),/b(20)]");
/// ```
#[derive(Debug, Clone)]
pub struct DelegationSet {
    is_sorted: bool,
    /// Sorted whenever `is_sorted` is set.
    dels: Vec<Delegation>,
}

impl Default for DelegationSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Outer TLV-TYPEs a delegation list can be carried in.
pub(crate) fn is_valid_tlv_type(typ: u32) -> bool {
    matches!(typ, CONTENT | FORWARDING_HINT)
}

impl DelegationSet {
    /// Creates an empty, sorted list.
    pub fn new() -> Self {
        Self {
            is_sorted: true,
            dels: Vec::new(),
        }
    }

    /// Creates a sorted list, inserting each delegation with
    /// [`InsertConflictResolution::Replace`].
    pub fn from_delegations(dels: impl IntoIterator<Item = Delegation>) -> Self {
        let mut set = Self::new();
        for del in dels {
            set.insert_delegation(del, InsertConflictResolution::Replace);
        }
        set
    }

    pub fn is_sorted(&self) -> bool {
        self.is_sorted
    }

    /// Sorts the list and keeps it sorted from now on.
    ///
    /// Does nothing on a list that is already sorted. Delegations that
    /// compare equal keep their relative order.
    pub fn sort(&mut self) {
        if self.is_sorted {
            return;
        }
        let dels = std::mem::take(&mut self.dels);
        self.is_sorted = true;
        for del in dels {
            self.insert_impl(del);
        }
    }

    /// Inserts a delegation, resolving a duplicate name per `on_conflict`.
    ///
    /// Returns whether the delegation was inserted; only
    /// [`InsertConflictResolution::Skip`] can return `false`.
    pub fn insert(
        &mut self,
        preference: u64,
        name: Name,
        on_conflict: InsertConflictResolution,
    ) -> bool {
        self.insert_delegation(Delegation::new(preference, name), on_conflict)
    }

    pub fn insert_delegation(
        &mut self,
        del: Delegation,
        on_conflict: InsertConflictResolution,
    ) -> bool {
        match on_conflict {
            InsertConflictResolution::Replace => {
                self.erase_impl(None, del.name());
                self.insert_impl(del);
                true
            }
            InsertConflictResolution::Append => {
                self.insert_impl(del);
                true
            }
            InsertConflictResolution::Skip => {
                if self.dels.iter().any(|d| d.name() == del.name()) {
                    return false;
                }
                self.insert_impl(del);
                true
            }
        }
    }

    /// Removes delegations with this preference and name; returns how many.
    pub fn erase(&mut self, preference: u64, name: &Name) -> usize {
        self.erase_impl(Some(preference), name)
    }

    /// Removes delegations with this name at any preference; returns how many.
    pub fn erase_name(&mut self, name: &Name) -> usize {
        self.erase_impl(None, name)
    }

    pub fn erase_delegation(&mut self, del: &Delegation) -> usize {
        self.erase_impl(Some(del.preference()), del.name())
    }

    /// Upper-bound insert when sorted, append otherwise.
    fn insert_impl(&mut self, del: Delegation) {
        if !self.is_sorted {
            trace!(%del, "append delegation");
            self.dels.push(del);
            return;
        }
        let pos = self.dels.partition_point(|d| d <= &del);
        trace!(%del, pos, "insert delegation");
        self.dels.insert(pos, del);
    }

    fn erase_impl(&mut self, preference: Option<u64>, name: &Name) -> usize {
        let before = self.dels.len();
        self.dels.retain(|d| {
            !(preference.map_or(true, |p| d.preference() == p) && d.name() == name)
        });
        before - self.dels.len()
    }

    /// Returns the `i`-th delegation or [`Error::OutOfRange`].
    pub fn at(&self, i: usize) -> Result<&Delegation, Error> {
        self.dels.get(i).ok_or(Error::OutOfRange {
            index: i,
            len: self.dels.len(),
        })
    }

    pub fn get(&self, i: usize) -> Option<&Delegation> {
        self.dels.get(i)
    }

    pub fn len(&self) -> usize {
        self.dels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Delegation> {
        self.dels.iter()
    }

    pub fn as_slice(&self) -> &[Delegation] {
        &self.dels
    }
}

/// Panics if `i` is out of range; use [`DelegationSet::at`] for a checked
/// lookup.
impl Index<usize> for DelegationSet {
    type Output = Delegation;

    fn index(&self, i: usize) -> &Delegation {
        &self.dels[i]
    }
}

impl PartialEq for DelegationSet {
    fn eq(&self, other: &Self) -> bool {
        self.dels == other.dels
    }
}

impl Eq for DelegationSet {}

impl FromIterator<Delegation> for DelegationSet {
    fn from_iter<I: IntoIterator<Item = Delegation>>(iter: I) -> Self {
        Self::from_delegations(iter)
    }
}

impl<'a> IntoIterator for &'a DelegationSet {
    type Item = &'a Delegation;
    type IntoIter = std::slice::Iter<'a, Delegation>;

    fn into_iter(self) -> Self::IntoIter {
        self.dels.iter()
    }
}

impl fmt::Display for DelegationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, del) in self.dels.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{del}")?;
        }
        f.write_str("]")
    }
}
