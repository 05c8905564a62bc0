use ndn_tlv::constants::{LINK_DELEGATION, LINK_PREFERENCE, NAME};
use ndn_tlv::{read_non_negative_integer, Block, Name};
use tracing::debug;

use super::{is_valid_tlv_type, DelegationSet};
use crate::{Delegation, FormatError};

impl DelegationSet {
    /// Decodes a list from a Content or ForwardingHint element.
    pub fn from_block(block: &Block, want_sort: bool) -> Result<Self, FormatError> {
        let mut set = Self::new();
        set.wire_decode(block, want_sort)?;
        Ok(set)
    }

    /// Decodes a list from raw bytes holding exactly one element.
    pub fn from_wire(wire: &[u8], want_sort: bool) -> Result<Self, FormatError> {
        let block = Block::decode(wire).map_err(FormatError::Malformed)?;
        Self::from_block(&block, want_sort)
    }

    /// Replaces the contents with the delegations in `block`.
    ///
    /// Every delegation on the wire is kept, duplicates included. With
    /// `want_sort` the result is sorted, otherwise it keeps wire order.
    ///
    /// If the outer TLV-TYPE is rejected the list is left untouched. Any
    /// later failure leaves it cleared or partially filled; discard it.
    pub fn wire_decode(&mut self, block: &Block, want_sort: bool) -> Result<(), FormatError> {
        if !is_valid_tlv_type(block.tlv_type()) {
            return Err(FormatError::UnexpectedListType(block.tlv_type()));
        }

        self.is_sorted = want_sort;
        self.dels.clear();

        for element in block.elements().map_err(FormatError::Malformed)? {
            let del = decode_delegation(&element)?;
            self.insert_impl(del);
        }

        if self.dels.is_empty() {
            return Err(FormatError::EmptyList);
        }
        debug!(
            typ = block.tlv_type(),
            count = self.dels.len(),
            sorted = want_sort,
            "decoded delegation list"
        );
        Ok(())
    }
}

fn decode_delegation(element: &Block) -> Result<Delegation, FormatError> {
    if element.tlv_type() != LINK_DELEGATION {
        return Err(FormatError::UnexpectedDelegationType(element.tlv_type()));
    }
    let fields = element.elements().map_err(FormatError::Malformed)?;
    let mut fields = fields.iter();

    let preference = match fields.next() {
        Some(field) if field.tlv_type() == LINK_PREFERENCE => {
            read_non_negative_integer(field).map_err(FormatError::InvalidPreference)?
        }
        _ => return Err(FormatError::MissingPreference),
    };

    let name = match fields.next() {
        Some(field) if field.tlv_type() == NAME => {
            Name::wire_decode(field).map_err(FormatError::InvalidName)?
        }
        _ => return Err(FormatError::MissingName),
    };

    Ok(Delegation::new(preference, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndn_tlv::constants::{CONTENT, FORWARDING_HINT};
    use ndn_tlv::TlvError;
    use std::error::Error as _;

    fn wrap(typ: u32, children: &[&[u8]]) -> Block {
        Block::new(typ, &children.concat())
    }

    const DEL_B20: &[u8] = &[31, 8, 30, 1, 20, 7, 3, 8, 1, b'b'];
    const DEL_A10: &[u8] = &[31, 8, 30, 1, 10, 7, 3, 8, 1, b'a'];

    #[test]
    fn sorted_decode_reorders() {
        let block = wrap(FORWARDING_HINT, &[DEL_B20, DEL_A10]);
        let set = DelegationSet::from_block(&block, true).unwrap();
        assert!(set.is_sorted());
        assert_eq!(set.to_string(), "[/a(10),/b(20)]");
    }

    #[test]
    fn unsorted_decode_keeps_wire_order() {
        let block = wrap(CONTENT, &[DEL_B20, DEL_A10]);
        let set = DelegationSet::from_block(&block, false).unwrap();
        assert!(!set.is_sorted());
        assert_eq!(set.to_string(), "[/b(20),/a(10)]");
    }

    #[test]
    fn duplicates_survive() {
        let block = wrap(FORWARDING_HINT, &[DEL_A10, DEL_A10]);
        let set = DelegationSet::from_block(&block, true).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn trailing_fields_after_name_are_ignored() {
        let del = [31, 11, 30, 1, 10, 7, 3, 8, 1, b'a', 99, 1, 0];
        let set = DelegationSet::from_block(&wrap(FORWARDING_HINT, &[&del[..]]), true).unwrap();
        assert_eq!(set.to_string(), "[/a(10)]");
    }

    #[test]
    fn rejected_list_type_leaves_contents() {
        let mut set = DelegationSet::from_block(&wrap(CONTENT, &[DEL_A10]), true).unwrap();
        let err = set.wire_decode(&wrap(6, &[DEL_B20]), false).unwrap_err();
        assert_eq!(err, FormatError::UnexpectedListType(6));
        assert_eq!(err.to_string(), "unexpected TLV-TYPE 6 while decoding delegation list");
        assert!(set.is_sorted());
        assert_eq!(set.to_string(), "[/a(10)]");
    }

    #[test]
    fn unexpected_delegation_type() {
        let block = wrap(FORWARDING_HINT, &[DEL_A10, &[32u8, 0][..]]);
        assert_eq!(
            DelegationSet::from_block(&block, true),
            Err(FormatError::UnexpectedDelegationType(32))
        );
    }

    #[test]
    fn missing_preference() {
        let name_first = [31, 5, 7, 3, 8, 1, b'a'];
        let block = wrap(FORWARDING_HINT, &[&name_first[..]]);
        assert_eq!(
            DelegationSet::from_block(&block, true),
            Err(FormatError::MissingPreference)
        );
        let empty = [31u8, 0];
        assert_eq!(
            DelegationSet::from_block(&wrap(FORWARDING_HINT, &[&empty[..]]), true),
            Err(FormatError::MissingPreference)
        );
    }

    #[test]
    fn invalid_preference_keeps_cause() {
        let three_bytes = [31u8, 10, 30, 3, 0, 0, 1, 7, 3, 8, 1, b'a'];
        let err = DelegationSet::from_block(&wrap(FORWARDING_HINT, &[&three_bytes[..]]), true)
            .unwrap_err();
        assert_eq!(
            err,
            FormatError::InvalidPreference(TlvError::InvalidNonNegativeIntegerLength(3))
        );
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("invalid length 3 for nonNegativeInteger".to_string())
        );
    }

    #[test]
    fn missing_name() {
        let no_name = [31u8, 3, 30, 1, 10];
        assert_eq!(
            DelegationSet::from_block(&wrap(FORWARDING_HINT, &[&no_name[..]]), true),
            Err(FormatError::MissingName)
        );
        let wrong_type = [31, 6, 30, 1, 10, 8, 1, b'a'];
        assert_eq!(
            DelegationSet::from_block(&wrap(FORWARDING_HINT, &[&wrong_type[..]]), true),
            Err(FormatError::MissingName)
        );
    }

    #[test]
    fn invalid_name_keeps_cause() {
        // Name holding a component with TLV-TYPE 0x10000.
        let bad_name = [31u8, 11, 30, 1, 10, 7, 6, 254, 0, 1, 0, 0, 0];
        assert_eq!(
            DelegationSet::from_block(&wrap(FORWARDING_HINT, &[&bad_name[..]]), true),
            Err(FormatError::InvalidName(TlvError::InvalidComponentType(0x10000)))
        );
    }

    #[test]
    fn malformed_child_framing() {
        let truncated = [31u8, 3, 30, 5, 1];
        assert!(matches!(
            DelegationSet::from_block(&wrap(FORWARDING_HINT, &[&truncated[..]]), true),
            Err(FormatError::Malformed(TlvError::LengthExceedsInput { .. }))
        ));
    }

    #[test]
    fn empty_list() {
        assert_eq!(
            DelegationSet::from_block(&wrap(CONTENT, &[]), true),
            Err(FormatError::EmptyList)
        );
    }

    #[test]
    fn from_wire_rejects_trailing_bytes() {
        let mut wire = wrap(CONTENT, &[DEL_A10]).into_wire();
        wire.push(0);
        assert_eq!(
            DelegationSet::from_wire(&wire, true),
            Err(FormatError::Malformed(TlvError::TrailingBytes(1)))
        );
    }
}
