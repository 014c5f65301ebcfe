use std::ops::Range;

pub trait RangeExt {
    fn is_splittable(&self) -> bool;

    fn is_empty(&self) -> bool;

    /// A range is considered normal if `range.start <= range.end` holds.
    fn is_normal(&self) -> bool;

    /// Gives the number of positions contained in the range, zero for
    /// degenerate ranges.
    fn len(&self) -> u64;

    fn split(&self) -> Option<(Self, Self)>
    where
        Self: Sized;

    fn intersects(&self, rhs: &Self) -> bool;

    fn is_superset(&self, other: &Self) -> bool;

    /// This restricts self, to not extend beyond other.
    fn clamp_by(&mut self, other: &Self);
}

impl RangeExt for Range<u64> {
    fn is_splittable(&self) -> bool {
        self.end - self.start > 1
    }

    fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    fn is_normal(&self) -> bool {
        self.start <= self.end
    }

    fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    fn split(&self) -> Option<(Self, Self)>
    where
        Self: Sized,
    {
        if self.is_splittable() {
            let mid = self.start + (self.end - self.start) / 2;
            Some((self.start..mid, mid..self.end))
        } else {
            None
        }
    }

    fn intersects(&self, rhs: &Self) -> bool {
        if self.is_empty() || rhs.is_empty() {
            return false;
        }

        if self.start <= rhs.start {
            self.end > rhs.start
        } else {
            rhs.end > self.start
        }
    }

    fn is_superset(&self, other: &Self) -> bool {
        other.is_empty() || (self.start <= other.start && other.end <= self.end)
    }

    fn clamp_by(&mut self, other: &Self) {
        self.start = self.start.max(self.end.min(other.start));
        self.end = self.end.min(self.start.max(other.end));
    }
}
