use super::LazySegmentTree;
use proptest::prelude::*;
use test_helpers::{store_ops, subrange, NaiveRangeStore, StoreOp};

#[test]
#[should_panic]
#[allow(clippy::reversed_empty_ranges)]
fn new_left_greater_than_right_panics() {
    LazySegmentTree::<i64>::new(100..50);
}

#[test]
#[should_panic]
fn new_left_equal_right_panics() {
    LazySegmentTree::<i64>::new(100..100);
}

#[test]
fn new_left_less_than_right_works() {
    LazySegmentTree::<i64>::new(100..150);
}

#[test]
#[allow(clippy::reversed_empty_ranges)]
fn invalid_assign_panics() {
    let left_bigger_than_right = std::panic::catch_unwind(|| {
        let mut tree = LazySegmentTree::<i64>::new(10..100);
        tree.assign(20..15, 1)
    });
    let left_outside_range = std::panic::catch_unwind(|| {
        let mut tree = LazySegmentTree::<i64>::new(10..100);
        tree.assign(9..15, 1)
    });
    let right_outside_range = std::panic::catch_unwind(|| {
        let mut tree = LazySegmentTree::<i64>::new(10..100);
        tree.assign(10..101, 1)
    });
    assert!(left_bigger_than_right.is_err());
    assert!(left_outside_range.is_err());
    assert!(right_outside_range.is_err());
}

#[test]
fn degenerate_queries_sum_to_zero() {
    let mut tree = LazySegmentTree::<i64>::new(10..100);
    tree.assign(10..100, 5);

    assert_eq!(tree.sum(42..42), 0);
    #[allow(clippy::reversed_empty_ranges)]
    let inverted = tree.sum(80..20);
    assert_eq!(inverted, 0);
    assert_eq!(tree.sum(0..10), 0);
    assert_eq!(tree.sum(100..2000), 0);
}

#[test]
fn queries_reaching_outside_count_outside_positions_as_zero() {
    let mut tree = LazySegmentTree::<i64>::new(10..20);
    tree.assign(10..20, 2);

    assert_eq!(tree.sum(0..2000), 20);
    assert_eq!(tree.sum(15..2000), 10);
    assert_eq!(tree.sum(0..15), 10);
}

// the booking scenario: positions 2..6 at 3, then 4..8 overwritten to 5
#[test]
fn overlapping_assignments_keep_the_latest_value() {
    let mut tree = LazySegmentTree::<i64>::new(0..10);

    tree.assign(2..6, 3);
    assert_eq!(tree.sum(0..10), 12);
    assert_eq!(tree.sum(0..2), 0);

    tree.assign(4..8, 5);
    assert_eq!(tree.sum(2..6), 16);
    assert_eq!(tree.sum(0..10), 26);

    assert_eq!(tree.get(3), 3);
    assert_eq!(tree.get(6), 5);
    assert_eq!(tree.get(9), 0);
    assert!(tree.validate());
}

#[test]
fn assignments_of_any_value_are_applied() {
    let mut tree = LazySegmentTree::<i64>::new(0..100);

    tree.assign(0..100, 7);
    assert_eq!(tree.sum(0..100), 700);

    tree.assign(20..30, -4);
    assert_eq!(tree.sum(20..30), -40);
    assert_eq!(tree.sum(0..100), 700 - 70 - 40);

    // assigning zero clears, it is not a no-op
    tree.assign(0..100, 0);
    assert_eq!(tree.sum(0..100), 0);
    assert!(tree.validate());
}

#[test]
fn assignments_push_pending_values_down_correctly() {
    let mut tree = LazySegmentTree::<i64>::new(0..8);

    tree.assign(0..8, 5);
    tree.assign(2..4, 1);

    assert_eq!(tree.sum(0..2), 10);
    assert_eq!(tree.sum(2..4), 2);
    assert_eq!(tree.sum(4..8), 20);
    assert_eq!(tree.sum(0..8), 32);
    assert!(tree.validate());
}

#[test]
fn assign_clamped_restricts_to_borders() {
    let mut tree = LazySegmentTree::<i64>::new(0..10);

    tree.assign_clamped(5..20, 2);
    assert_eq!(tree.sum(0..10), 10);

    tree.assign_clamped(0..30, 1);
    assert_eq!(tree.sum(0..10), 10);
}

#[test]
fn with_assignments_applies_in_order() {
    let tree =
        LazySegmentTree::<i64>::with_assignments(0..10, vec![(2..6, 3), (4..8, 5)]).unwrap();
    assert_eq!(tree.sum(0..10), 26);
}

#[test]
#[allow(clippy::reversed_empty_ranges)]
fn with_assignments_rejects_invalid_ranges() {
    assert!(LazySegmentTree::<i64>::with_assignments(0..10, vec![(2..12, 3)]).is_err());
    assert!(LazySegmentTree::<i64>::with_assignments(0..10, vec![(6..2, 3)]).is_err());
}

#[test]
fn node_growth_is_logarithmic_in_the_domain() {
    let mut tree = LazySegmentTree::<i64>::new(0..1_000_000_000);
    for i in 0..100u64 {
        let start = i * 7_654_321;
        tree.assign(start..start + 1_000_000, i as i64);
    }

    // every assignment materializes at most four nodes per level and the
    // tree has 30 levels, so this stays far below the domain size
    assert!(tree.node_count() < 100 * 4 * 30 + 1);
    assert!(tree.validate());
}

#[test]
fn works_with_other_value_types() {
    let mut tree = LazySegmentTree::<u32>::new(0..1_000);
    tree.assign(100..200, 3);
    assert_eq!(tree.sum(0..1_000), 300);
    assert_eq!(tree.get(100), 3);
}

proptest! {
    #[test]
    fn full_assignment_sums_to_value_times_length(
        range in subrange(0, 1_000_000),
        value in -1_000i64..1_000
    ) {
        let mut tree = LazySegmentTree::<i64>::new(0..1_000_000);
        tree.assign(range.clone(), value);

        prop_assert_eq!(tree.sum(range.clone()), value * (range.end - range.start) as i64);
    }

    #[test]
    fn assignments_do_not_leak_into_disjoint_ranges(
        ops in store_ops(0, 500, 32),
        target in subrange(500, 1_000),
        value in -1_000i64..1_000
    ) {
        let mut tree = LazySegmentTree::<i64>::new(0..1_000);
        for op in ops {
            if let StoreOp::Assign(range, value) = op {
                tree.assign(range, value);
            }
        }

        let before = tree.sum(0..500);
        tree.assign(target, value);
        prop_assert_eq!(tree.sum(0..500), before);
    }

    #[test]
    fn sums_decompose_at_any_midpoint(
        ops in store_ops(0, 1_000, 32),
        cut in subrange(0, 1_000)
    ) {
        let mut tree = LazySegmentTree::<i64>::new(0..1_000);
        for op in ops {
            if let StoreOp::Assign(range, value) = op {
                tree.assign(range, value);
            }
        }

        let (left, mid, right) = (cut.start, cut.start + (cut.end - cut.start) / 2, cut.end);
        prop_assert_eq!(tree.sum(left..right), tree.sum(left..mid) + tree.sum(mid..right));
    }

    #[test]
    fn random_operations_match_the_naive_store(ops in store_ops(0, 512, 64)) {
        let mut tree = LazySegmentTree::<i64>::new(0..512);
        let mut naive = NaiveRangeStore::<i64>::new(0..512);

        for op in ops {
            match op {
                StoreOp::Assign(range, value) => {
                    tree.assign(range.clone(), value);
                    naive.assign(range, value);
                }
                StoreOp::Sum(range) => {
                    prop_assert_eq!(tree.sum(range.clone()), naive.sum(range));
                }
            }
        }

        for position in 0..512 {
            prop_assert_eq!(tree.get(position), naive.get(position));
        }
        prop_assert!(tree.validate());
    }
}
