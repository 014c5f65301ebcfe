#![cfg_attr(feature = "strict", deny(warnings))]
#![cfg_attr(feature = "strict", deny(clippy::all))]
#![cfg_attr(feature = "strict", deny(missing_docs))]
//! This crate contains stuff that's really helpful for tests.
use proptest::prelude::*;
use std::cmp::{max, min};
use std::ops::Range;

mod naive;
pub use naive::NaiveRangeStore;

prop_compose! {
    /// Gives a strategy generating a normal, non-empty subrange of `from..to`.
    pub fn subrange(from: u64, to: u64)(
        x in from..to,
        y in from..to
    ) -> Range<u64> {
        if x == y {
            return from..to;
        }

        min(x, y)..max(x, y)
    }
}

/// A single operation against a range store, as replayed by the stress tests.
#[derive(Debug, Clone)]
pub enum StoreOp {
    /// Set every position in the range to the value.
    Assign(Range<u64>, i64),
    /// Query the sum over the range.
    Sum(Range<u64>),
}

/// Gives a strategy generating a single [StoreOp] within `from..to`.
pub fn store_op(from: u64, to: u64) -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        (subrange(from, to), -1000i64..1000i64)
            .prop_map(|(range, value)| StoreOp::Assign(range, value)),
        subrange(from, to).prop_map(StoreOp::Sum),
    ]
}

/// Gives a strategy generating between one and `limit` many [store_op]s.
pub fn store_ops(from: u64, to: u64, limit: usize) -> impl Strategy<Value = Vec<StoreOp>> {
    prop::collection::vec(store_op(from, to), 1..limit)
}
