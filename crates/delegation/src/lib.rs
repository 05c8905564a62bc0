//! Ordered lists of NDN delegations.
//!
//! A delegation is a (preference, name) pair naming an alternative place an
//! Interest can be forwarded towards. Lists of them are carried in
//! ForwardingHint elements and in the Content of Link objects.
//!
//! ```
//! use ndn_delegation::{DelegationSet, InsertConflictResolution::*};
//! use ndn_tlv::constants::FORWARDING_HINT;
//!
//! let mut hint = DelegationSet::new();
//! hint.insert(10, "/telia/terabits".parse().unwrap(), Replace);
//! hint.insert(20, "/ucla".parse().unwrap(), Replace);
//!
//! let wire = hint.to_wire(FORWARDING_HINT).unwrap();
//! let back = ndn_delegation::DelegationSet::from_wire(&wire, true).unwrap();
//! assert_eq!(back, hint);
//! ```

pub mod cli;

mod delegation;
mod delegation_set;
mod error;
mod policy;

pub use delegation::Delegation;
pub use delegation_set::DelegationSet;
pub use error::{Error, FormatError, UsageError};
pub use policy::InsertConflictResolution;
