//! Logic behind the `delegation-list` binary.
//!
//! - `encode` — text lines `<preference> <name>` → hex TLV
//! - `decode` — hex TLV → `[/name(preference),...]`

use ndn_tlv::constants::FORWARDING_HINT;
use ndn_tlv::Name;
use thiserror::Error;
use tracing::debug;

use crate::{DelegationSet, Error, FormatError, InsertConflictResolution, UsageError};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error(transparent)]
    Delegation(#[from] Error),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Usage(#[from] UsageError),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

// ── encode ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Outer TLV-TYPE.
    pub tlv_type: u32,
    pub on_conflict: InsertConflictResolution,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            tlv_type: FORWARDING_HINT,
            on_conflict: InsertConflictResolution::Replace,
        }
    }
}

/// Builds a sorted list from lines of `<preference> <name>`.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_delegations(
    input: &str,
    on_conflict: InsertConflictResolution,
) -> Result<DelegationSet, CliError> {
    let mut set = DelegationSet::new();
    for (i, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parse_err = |message: String| CliError::Parse {
            line: i + 1,
            message,
        };
        let (preference, name) = line
            .split_once(char::is_whitespace)
            .ok_or_else(|| parse_err(format!("expected `<preference> <name>`, got {line:?}")))?;
        let preference = preference
            .parse::<u64>()
            .map_err(|e| parse_err(format!("bad preference {preference:?}: {e}")))?;
        let name = name
            .trim()
            .parse::<Name>()
            .map_err(|e| parse_err(e.to_string()))?;
        if !set.insert(preference, name, on_conflict) {
            debug!(line = i + 1, "skipped delegation with duplicate name");
        }
    }
    Ok(set)
}

/// Encodes text input to lowercase hex.
pub fn encode(input: &str, options: &EncodeOptions) -> Result<String, CliError> {
    let set = parse_delegations(input, options.on_conflict)?;
    let wire = set.to_wire(options.tlv_type)?;
    Ok(hex::encode(wire))
}

// ── decode ────────────────────────────────────────────────────────────────

/// Decodes hex input (whitespace ignored).
pub fn decode(input: &str, want_sort: bool) -> Result<DelegationSet, CliError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let wire = hex::decode(compact)?;
    Ok(DelegationSet::from_wire(&wire, want_sort)?)
}
