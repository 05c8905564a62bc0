//! TLV-TYPE numbers used by the delegation list codec and its collaborators.

pub const IMPLICIT_SHA256_DIGEST_COMPONENT: u32 = 1;
pub const PARAMETERS_SHA256_DIGEST_COMPONENT: u32 = 2;
pub const NAME: u32 = 7;
pub const GENERIC_NAME_COMPONENT: u32 = 8;
pub const CONTENT: u32 = 21;

/// Outer element of a delegation list carried outside a Link object.
pub const FORWARDING_HINT: u32 = 30;
pub const LINK_PREFERENCE: u32 = 30;
pub const LINK_DELEGATION: u32 = 31;

/// Largest TLV-TYPE a name component may carry.
pub const MAX_COMPONENT_TYPE: u32 = 65535;
