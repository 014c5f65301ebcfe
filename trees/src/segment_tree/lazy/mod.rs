use std::{num::NonZeroUsize, ops::Range};

use common::RtResult;
use num::PrimInt;

use super::RangeExt;

mod validation;

/// An Index into a LazySegmentTree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
// Using NonZeroUsize decreases the raw memory of LazySegmentTreeNode by half
pub struct LazySegmentTreeNodeIdx(NonZeroUsize);

impl From<usize> for LazySegmentTreeNodeIdx {
    fn from(u: usize) -> Self {
        Self(NonZeroUsize::new(u + 1).unwrap())
    }
}
impl From<LazySegmentTreeNodeIdx> for usize {
    fn from(idx: LazySegmentTreeNodeIdx) -> Self {
        Into::<usize>::into(idx.0) - 1
    }
}

impl LazySegmentTreeNodeIdx {
    pub fn into_usize(self) -> usize {
        Into::<usize>::into(self)
    }
}

#[derive(Debug, Clone)]
struct LazySegmentTreeNode<V> {
    left: Option<LazySegmentTreeNodeIdx>,
    right: Option<LazySegmentTreeNodeIdx>,
    aggregate: V,
    pending: Option<V>,
}

impl<V: PrimInt> LazySegmentTreeNode<V> {
    fn new() -> Self {
        Self {
            left: None,
            right: None,
            aggregate: V::zero(),
            pending: None,
        }
    }
}

/// A SegmentTree over a huge index domain which creates its nodes lazily and
/// defers range assignments through pending markers.
///
/// The tree holds one value per position of its domain, initially all zero.
/// [assign](LazySegmentTree::assign) overwrites every position of a range
/// with a single value, [sum](LazySegmentTree::sum) gives the sum over a
/// range. Both touch `O(log(domain length))` nodes, so domains like
/// `0..1_000_000_000` are fine: storage grows with the number of
/// assignments, never with the domain itself.
///
/// The interval covered by a node is not stored in the node; it is re-derived
/// on every traversal by repeatedly splitting the root interval at its
/// midpoint.
/// # Remark
/// Aggregates are computed in `V`. The caller is responsible for choosing a
/// value type large enough to hold `value * domain length` for the values it
/// assigns.
#[derive(Debug, Clone)]
pub struct LazySegmentTree<V> {
    range: Range<u64>,
    data: Vec<LazySegmentTreeNode<V>>,
}

impl<V: PrimInt> LazySegmentTree<V> {
    /// Creates a new LazySegmentTree over `range` with every position zero.
    /// # Panics
    /// If the supplied range is empty or its length is not representable in `V`.
    pub fn new(range: Range<u64>) -> Self {
        assert!(!range.is_empty());
        assert!(
            V::from(range.len()).is_some(),
            "the domain length must be representable in the value type"
        );
        let data = vec![LazySegmentTreeNode::new()];
        LazySegmentTree { range, data }
    }

    /// Creates a new LazySegmentTree over `range`, with all the given
    /// assignments applied in order.
    /// # Panics
    /// Refer to [new](LazySegmentTree::new).
    /// # Returns
    /// Returns an error if an assignment range is not normal or reaches
    /// outside `range`.
    pub fn with_assignments<I>(range: Range<u64>, assignments: I) -> RtResult<Self>
    where
        I: IntoIterator<Item = (Range<u64>, V)>,
    {
        let mut res = Self::new(range);
        for (target, value) in assignments {
            if !target.is_normal() {
                return Err(format!(
                    "LazySegmentTree: assignment {}..{} is not a normal range",
                    target.start, target.end
                )
                .into());
            }
            if !res.range.is_superset(&target) {
                return Err(format!(
                    "LazySegmentTree: assignment {}..{} reaches outside of {}..{}",
                    target.start, target.end, res.range.start, res.range.end
                )
                .into());
            }
            res.assign(target, value);
        }
        Ok(res)
    }

    /// Gives the range for which the tree holds values.
    pub fn borders(&self) -> Range<u64> {
        self.range.clone()
    }

    /// Gives the number of materialized nodes.
    pub fn node_count(&self) -> usize {
        self.data.len()
    }

    /// Sets every position in `range` to `value`. Afterwards each position in
    /// `range` behaves as if it had been written individually; whatever was
    /// stored there before is forgotten.
    /// # Runtime
    /// O(log D) where D is the length of [borders](LazySegmentTree::borders).
    /// At most two nodes are materialized per level of recursion.
    /// # Panics
    /// If `range` is not normal or not contained in [borders](LazySegmentTree::borders).
    pub fn assign(&mut self, range: Range<u64>, value: V) {
        assert!(range.is_normal());
        if range.is_empty() {
            return;
        }
        assert!(self.range.is_superset(&range));
        let root_range = self.range.clone();
        self.assign_inner(0.into(), &root_range, &range, value);
    }

    /// Behaves exactly like [assign](LazySegmentTree::assign), but if the
    /// range extends beyond [borders](LazySegmentTree::borders) it is
    /// restricted to the borders first.
    pub fn assign_clamped(&mut self, mut range: Range<u64>, value: V) {
        range.clamp_by(&self.range);

        self.assign(range, value);
    }

    /// Gives the sum over `range`. Positions outside
    /// [borders](LazySegmentTree::borders) contribute zero, degenerate
    /// (empty or inverted) ranges sum to zero.
    ///
    /// The tree is not changed by a query; in particular no nodes are
    /// materialized. Intervals wholly covered by a pending assignment are
    /// summed directly from the pending value.
    /// # Runtime
    /// O(log D) where D is the length of [borders](LazySegmentTree::borders).
    pub fn sum(&self, mut range: Range<u64>) -> V {
        range.clamp_by(&self.range);
        if range.is_empty() {
            return V::zero();
        }
        self.sum_inner(0.into(), &self.range, &range)
    }

    /// Gives the value at a single position.
    /// # Panics
    /// If `position` lies outside [borders](LazySegmentTree::borders).
    pub fn get(&self, position: u64) -> V {
        assert!(self.range.contains(&position));
        self.sum(position..position + 1)
    }

    // The downcast cannot fail: `new` checks that the whole domain length is
    // representable in V and every node interval is a subrange of the domain.
    fn value_of_len(interval_len: u64) -> V {
        V::from(interval_len).expect("interval lengths are representable in the value type")
    }

    // Overwrites the complete interval of a node, deferring the write to its
    // descendants through the pending marker.
    fn apply(&mut self, idx: LazySegmentTreeNodeIdx, interval_len: u64, value: V) {
        let node = &mut self.data[idx.into_usize()];
        node.pending = Some(value);
        node.aggregate = value * Self::value_of_len(interval_len);
    }

    // This creates the left child of node `idx` if it does not exist and `idx` is no leaf.
    fn create_left_child(&mut self, range: &Range<u64>, idx: LazySegmentTreeNodeIdx) {
        if self.data[idx.into_usize()].left.is_none() && range.is_splittable() {
            self.data.push(LazySegmentTreeNode::new());
            let new_left = Some(self.data.len() - 1);
            self.data[idx.into_usize()].left = new_left.map(Into::into);
        }
    }

    // This creates the right child of node `idx` if it does not exist and `idx` is no leaf.
    fn create_right_child(&mut self, range: &Range<u64>, idx: LazySegmentTreeNodeIdx) {
        if self.data[idx.into_usize()].right.is_none() && range.is_splittable() {
            self.data.push(LazySegmentTreeNode::new());
            let new_right = Some(self.data.len() - 1);
            self.data[idx.into_usize()].right = new_right.map(Into::into);
        }
    }

    // Materializes both children of `idx` and duplicates a pending assignment
    // into them. The aggregate of `idx` stays untouched, it already reflects
    // the pending write. Gives the child intervals.
    fn push_down(
        &mut self,
        idx: LazySegmentTreeNodeIdx,
        node_range: &Range<u64>,
    ) -> (Range<u64>, Range<u64>) {
        let (left_range, right_range) = node_range
            .split()
            .expect("push_down is only reached for splittable intervals");
        self.create_left_child(node_range, idx);
        self.create_right_child(node_range, idx);
        if let Some(value) = self.data[idx.into_usize()].pending.take() {
            let left = self.left_child_of(idx);
            let right = self.right_child_of(idx);
            self.apply(left, left_range.len(), value);
            self.apply(right, right_range.len(), value);
        }
        (left_range, right_range)
    }

    fn left_child_of(&self, idx: LazySegmentTreeNodeIdx) -> LazySegmentTreeNodeIdx {
        self.data[idx.into_usize()]
            .left
            .expect("push_down materializes both children")
    }

    fn right_child_of(&self, idx: LazySegmentTreeNodeIdx) -> LazySegmentTreeNodeIdx {
        self.data[idx.into_usize()]
            .right
            .expect("push_down materializes both children")
    }

    fn assign_inner(
        &mut self,
        idx: LazySegmentTreeNodeIdx,
        node_range: &Range<u64>,
        query_range: &Range<u64>,
        value: V,
    ) {
        if !node_range.intersects(query_range) {
            return;
        }
        if query_range.is_superset(node_range) {
            // this is a minimal covered segment so the write stops here.
            self.apply(idx, node_range.len(), value);
            return;
        }

        let (left_range, right_range) = self.push_down(idx, node_range);
        let left = self.left_child_of(idx);
        let right = self.right_child_of(idx);
        self.assign_inner(left, &left_range, query_range, value);
        self.assign_inner(right, &right_range, query_range, value);
        self.data[idx.into_usize()].aggregate =
            self.data[left.into_usize()].aggregate + self.data[right.into_usize()].aggregate;
    }

    fn sum_inner(
        &self,
        idx: LazySegmentTreeNodeIdx,
        node_range: &Range<u64>,
        query_range: &Range<u64>,
    ) -> V {
        if !node_range.intersects(query_range) {
            return V::zero();
        }
        let node = &self.data[idx.into_usize()];
        if query_range.is_superset(node_range) {
            return node.aggregate;
        }
        if let Some(value) = node.pending {
            // the whole interval uniformly holds `value`, the children are stale.
            let mut overlap = query_range.clone();
            overlap.clamp_by(node_range);
            return value * Self::value_of_len(overlap.len());
        }

        let (left_range, right_range) = node_range
            .split()
            .expect("a partially overlapped interval is splittable");
        let left_sum = match node.left {
            Some(child) => self.sum_inner(child, &left_range, query_range),
            None => V::zero(),
        };
        let right_sum = match node.right {
            Some(child) => self.sum_inner(child, &right_range, query_range),
            None => V::zero(),
        };
        left_sum + right_sum
    }
}
