use num::PrimInt;
use std::convert::TryFrom;
use std::ops::Range;

/// An eagerly materialized range store with the same contract as the lazy tree.
/// Every assignment is applied to every covered position, so this is only
/// usable for small domains. It serves as the reference implementation for
/// stress tests.
#[derive(Debug, Clone)]
pub struct NaiveRangeStore<V> {
    range: Range<u64>,
    values: Vec<V>,
}

impl<V: PrimInt> NaiveRangeStore<V> {
    /// Creates a store over `range` with every position set to zero.
    /// # Panics
    /// If the supplied range is empty or does not fit into memory.
    pub fn new(range: Range<u64>) -> Self {
        assert!(range.start < range.end);
        let len = usize::try_from(range.end - range.start)
            .expect("NaiveRangeStore domains must fit into a Vec");
        Self {
            values: vec![V::zero(); len],
            range,
        }
    }

    /// Gives the range for which the store holds values.
    pub fn borders(&self) -> Range<u64> {
        self.range.clone()
    }

    /// Sets every position in `range` to `value`.
    /// # Panics
    /// If `range` is not normal or not contained in [borders](NaiveRangeStore::borders).
    pub fn assign(&mut self, range: Range<u64>, value: V) {
        assert!(range.start <= range.end);
        if range.start == range.end {
            return;
        }
        assert!(self.range.start <= range.start && range.end <= self.range.end);
        for position in range {
            let index = (position - self.range.start) as usize;
            self.values[index] = value;
        }
    }

    /// Behaves exactly like [assign](NaiveRangeStore::assign), but restricts
    /// the range to [borders](NaiveRangeStore::borders) first.
    pub fn assign_clamped(&mut self, range: Range<u64>, value: V) {
        let start = range.start.max(self.range.start).min(self.range.end);
        let end = range.end.min(self.range.end).max(start);
        if start < end {
            self.assign(start..end, value);
        }
    }

    /// Gives the sum over `range`. Positions outside
    /// [borders](NaiveRangeStore::borders) contribute zero, degenerate ranges
    /// sum to zero.
    pub fn sum(&self, range: Range<u64>) -> V {
        if range.end <= range.start {
            return V::zero();
        }
        let start = range.start.max(self.range.start);
        let end = range.end.min(self.range.end);
        (start..end.max(start)).fold(V::zero(), |acc, position| {
            acc + self.values[(position - self.range.start) as usize]
        })
    }

    /// Gives the value at a single position.
    /// # Panics
    /// If `position` is outside [borders](NaiveRangeStore::borders).
    pub fn get(&self, position: u64) -> V {
        assert!(self.range.contains(&position));
        self.values[(position - self.range.start) as usize]
    }
}
