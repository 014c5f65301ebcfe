//! This module contains everything related to the lazy Segment Tree datastructure.
//!
//! The tree covers an index domain which is far too large to materialize
//! position by position (think 10^9 positions). Nodes are created on demand
//! and range assignments are deferred through pending markers, so storage
//! only grows with the number of distinct ranges actually touched.
//! # Example
//! Marking bookings on a nanosecond-resolution timeline and asking how much
//! of a window is booked:
//! ```
//! use trees::segment_tree::LazySegmentTree;
//!
//! let mut timeline = LazySegmentTree::<i64>::new(0..1_000_000_000);
//! timeline.assign(250_000_000..750_000_000, 1);
//! assert_eq!(timeline.sum(0..1_000_000_000), 500_000_000);
//!
//! // a later booking overwrites part of the earlier one
//! timeline.assign(500_000_000..600_000_000, 3);
//! assert_eq!(timeline.sum(400_000_000..700_000_000), 100_000_000 + 300_000_000 + 100_000_000);
//! ```

mod range;
use range::RangeExt;

mod lazy;
pub use lazy::LazySegmentTree;

#[cfg(test)]
mod tests;
