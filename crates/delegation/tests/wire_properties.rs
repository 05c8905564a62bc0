use ndn_buffers::{Encoder, EncodingBuffer, EncodingEstimator};
use ndn_delegation::InsertConflictResolution::Append;
use ndn_delegation::{Delegation, DelegationSet, Error, FormatError};
use ndn_tlv::constants::{CONTENT, FORWARDING_HINT};
use ndn_tlv::{Block, Component, Name};
use proptest::prelude::*;

fn arb_name() -> impl Strategy<Value = Name> {
    proptest::collection::vec(
        proptest::collection::vec(any::<u8>(), 0..6).prop_map(Component::generic),
        0..4,
    )
    .prop_map(Name::from_components)
}

fn arb_delegations() -> impl Strategy<Value = Vec<(u64, Name)>> {
    proptest::collection::vec((any::<u64>(), arb_name()), 1..8)
}

/// Decodes `dels` from wire order into an unsorted list.
fn unsorted(dels: &[(u64, Name)]) -> DelegationSet {
    let wire = wire_in_order(dels);
    DelegationSet::from_wire(&wire, false).unwrap()
}

/// Hand-built forwarding hint holding `dels` in the given order.
fn wire_in_order(dels: &[(u64, Name)]) -> Vec<u8> {
    let mut value = Vec::new();
    for (p, n) in dels {
        let single = DelegationSet::from_delegations([Delegation::new(*p, n.clone())]);
        let block = single.to_block(FORWARDING_HINT).unwrap();
        value.extend_from_slice(block.value());
    }
    Block::new(FORWARDING_HINT, &value).into_wire()
}

proptest! {
    #[test]
    fn sorted_round_trip(dels in arb_delegations(), content in any::<bool>()) {
        let mut set = DelegationSet::new();
        for (p, n) in &dels {
            set.insert(*p, n.clone(), Append);
        }
        let typ = if content { CONTENT } else { FORWARDING_HINT };
        let block = set.to_block(typ).unwrap();
        prop_assert_eq!(DelegationSet::from_block(&block, true).unwrap(), set);
    }

    #[test]
    fn unsorted_decode_preserves_wire_order(dels in arb_delegations()) {
        let set = unsorted(&dels);
        prop_assert!(!set.is_sorted());
        let got: Vec<(u64, Name)> = set
            .iter()
            .map(|d| (d.preference(), d.name().clone()))
            .collect();
        prop_assert_eq!(got, dels);
    }

    #[test]
    fn sort_is_total_order_and_idempotent(dels in arb_delegations()) {
        let mut set = unsorted(&dels);
        set.sort();
        for pair in set.as_slice().windows(2) {
            prop_assert!(pair[0].preference() <= pair[1].preference());
            if pair[0].preference() == pair[1].preference() {
                prop_assert!(pair[0].name() <= pair[1].name());
            }
        }
        let once = set.clone();
        set.sort();
        prop_assert_eq!(set, once);
    }

    #[test]
    fn sort_matches_incremental_insert(dels in arb_delegations()) {
        let mut resorted = unsorted(&dels);
        resorted.sort();
        let mut incremental = DelegationSet::new();
        for (p, n) in &dels {
            incremental.insert(*p, n.clone(), Append);
        }
        prop_assert_eq!(resorted, incremental);
    }

    #[test]
    fn estimate_equals_written(dels in arb_delegations()) {
        let set = unsorted(&dels);
        let mut est = EncodingEstimator::new();
        let mut buf = EncodingBuffer::new();
        let estimated = set.wire_encode(&mut est, FORWARDING_HINT).unwrap();
        let written = set.wire_encode(&mut buf, FORWARDING_HINT).unwrap();
        prop_assert_eq!(estimated, written);
        prop_assert_eq!(est.size(), buf.len());
    }
}

#[test]
fn sorted_and_unsorted_lists_compare_unequal() {
    let a: Name = "/a".parse().unwrap();
    let b: Name = "/b".parse().unwrap();
    let sorted = DelegationSet::from_delegations([
        Delegation::new(5, a.clone()),
        Delegation::new(10, b.clone()),
    ]);
    let reversed = unsorted(&[(10, b), (5, a)]);
    assert_ne!(sorted, reversed);
    assert_eq!(reversed.to_string(), "[/b(10),/a(5)]");
}

#[test]
fn unsorted_list_encodes_in_stored_order() {
    let dels: [(u64, Name); 2] = [(30, "/c".parse().unwrap()), (1, "/a".parse().unwrap())];
    let set = unsorted(&dels);
    assert_eq!(set.to_wire(FORWARDING_HINT).unwrap(), wire_in_order(&dels));
}

#[test]
fn large_preference_round_trips() {
    let set = DelegationSet::from_delegations([Delegation::new(u64::MAX, "/x".parse().unwrap())]);
    let wire = set.to_wire(CONTENT).unwrap();
    assert_eq!(DelegationSet::from_wire(&wire, true).unwrap(), set);
}

#[test]
fn empty_list_fails_both_ways() {
    assert_eq!(
        DelegationSet::new().to_wire(CONTENT),
        Err(Error::Format(FormatError::EmptyList))
    );
    let block = Block::new(FORWARDING_HINT, &[]);
    assert_eq!(
        DelegationSet::from_block(&block, true),
        Err(FormatError::EmptyList)
    );
}

#[test]
fn unknown_outer_type_is_named() {
    let block = Block::new(200, &[31, 0]);
    let err = DelegationSet::from_block(&block, true).unwrap_err();
    assert_eq!(err, FormatError::UnexpectedListType(200));
    assert!(err.to_string().contains("200"));
}

#[test]
fn at_and_index_agree() {
    let set = DelegationSet::from_delegations([Delegation::new(1, "/a".parse().unwrap())]);
    assert_eq!(set.at(0).unwrap(), &set[0]);
    assert!(matches!(set.at(5), Err(Error::OutOfRange { index: 5, len: 1 })));
}
