//! Property-based tests for normalization and aggregation

use proptest::prelude::*;
use validation_rail::sequence::{aggregate, normalize};
use validation_rail::{ErrorSource, Lazy, SinglePass};

/// Builds a source of the given shape over `entries`.
fn shaped(shape: u8, entries: Vec<u32>) -> ErrorSource<u32> {
    match shape % 3 {
        0 => ErrorSource::ordered(entries),
        1 => Lazy::new(entries.into_iter()).into(),
        _ => SinglePass::new(entries.into_iter()).into(),
    }
}

fn entry_lists() -> impl Strategy<Value = Vec<Vec<u32>>> {
    prop::collection::vec(prop::collection::vec(any::<u32>(), 0..6), 0..8)
}

proptest! {
    #[test]
    fn prop_aggregate_equals_concatenation(lists in entry_lists(), shapes in any::<u8>()) {
        let expected: Vec<u32> = lists.iter().flatten().copied().collect();
        let sources: Vec<ErrorSource<u32>> = lists
            .into_iter()
            .enumerate()
            .map(|(i, entries)| shaped(shapes.wrapping_add(i as u8), entries))
            .collect();

        let merged: Vec<u32> = aggregate(sources).collect();
        prop_assert_eq!(merged, expected);
    }

    #[test]
    fn prop_aggregate_is_associative(
        a in prop::collection::vec(any::<u32>(), 0..6),
        b in prop::collection::vec(any::<u32>(), 0..6),
        c in prop::collection::vec(any::<u32>(), 0..6),
    ) {
        let left = ErrorSource::concat([
            ErrorSource::concat([ErrorSource::ordered(a.clone()), ErrorSource::ordered(b.clone())]),
            ErrorSource::ordered(c.clone()),
        ]);
        let right = ErrorSource::concat([
            ErrorSource::ordered(a),
            ErrorSource::concat([ErrorSource::ordered(b), ErrorSource::ordered(c)]),
        ]);

        prop_assert_eq!(left.sequence().collect::<Vec<_>>(), right.sequence().collect::<Vec<_>>());
    }

    #[test]
    fn prop_single_entry_normalizes_to_itself(entry in any::<u32>()) {
        prop_assert_eq!(normalize(ErrorSource::single(entry)).collect::<Vec<_>>(), vec![entry]);
        prop_assert_eq!(normalize(Some(entry)).collect::<Vec<_>>(), vec![entry]);
    }

    #[test]
    fn prop_ordered_container_normalizes_in_order(entries in prop::collection::vec(any::<u32>(), 0..20)) {
        prop_assert_eq!(normalize(entries.clone()).collect::<Vec<_>>(), entries);
    }

    #[test]
    fn prop_restartable_sources_read_identically_twice(entries in prop::collection::vec(any::<u32>(), 0..20)) {
        let source: ErrorSource<u32> = Lazy::new(entries.clone().into_iter()).into();
        prop_assert_eq!(source.sequence().collect::<Vec<_>>(), entries.clone());
        prop_assert_eq!(source.sequence().collect::<Vec<_>>(), entries);
    }

    #[test]
    fn prop_is_empty_matches_entry_count(lists in entry_lists(), shapes in any::<u8>()) {
        let total: usize = lists.iter().map(Vec::len).sum();
        let source = ErrorSource::concat(
            lists
                .into_iter()
                .enumerate()
                .map(|(i, entries)| shaped(shapes.wrapping_add(i as u8), entries)),
        );

        prop_assert_eq!(source.is_empty(), total == 0);
        prop_assert_eq!(source.sequence().count(), total);
    }
}
