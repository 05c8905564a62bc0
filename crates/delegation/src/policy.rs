use std::fmt;
use std::str::FromStr;

use crate::UsageError;

/// What [`DelegationSet::insert`](crate::DelegationSet::insert) does when the
/// name is already present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InsertConflictResolution {
    /// Existing delegations with the same name are removed first.
    #[default]
    Replace,
    /// The new delegation is added next to the existing ones.
    ///
    /// Link objects should not carry duplicate names; this exists for
    /// callers that need to reproduce such lists.
    Append,
    /// The new delegation is dropped.
    Skip,
}

impl FromStr for InsertConflictResolution {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "replace" => Ok(Self::Replace),
            "append" => Ok(Self::Append),
            "skip" => Ok(Self::Skip),
            _ => Err(UsageError::UnknownConflictResolution(s.to_string())),
        }
    }
}

impl fmt::Display for InsertConflictResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Replace => "replace",
            Self::Append => "append",
            Self::Skip => "skip",
        })
    }
}
