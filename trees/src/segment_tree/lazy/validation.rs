use std::fmt::Debug;
use std::ops::Range;

use num::PrimInt;

use super::super::RangeExt;
use super::{LazySegmentTree, LazySegmentTreeNodeIdx};

impl<V: PrimInt + Debug> LazySegmentTree<V> {
    /// Checks that every materialized node's aggregate is consistent with its
    /// interval: under a pending assignment the aggregate has to equal the
    /// pending value times the interval length, otherwise it has to equal the
    /// sum of the child aggregates, where absent children count as zero.
    ///
    /// Each violation is reported via `log::error!`. Gives whether the whole
    /// structure is consistent.
    ///
    /// Nodes below a pending assignment are not inspected, their contents are
    /// superseded by the pending value.
    pub fn validate(&self) -> bool {
        let root_range = self.borders();
        self.validate_inner(0.into(), &root_range)
    }

    fn validate_inner(&self, idx: LazySegmentTreeNodeIdx, node_range: &Range<u64>) -> bool {
        let node = &self.data[idx.into_usize()];

        if let Some(value) = node.pending {
            let cur_valid = node.aggregate == value * Self::value_of_len(node_range.len());
            if !cur_valid {
                log::error!(
                    "Node over {}..{} has pending value {:?} but aggregate {:?}.",
                    node_range.start,
                    node_range.end,
                    value,
                    node.aggregate
                );
            }
            return cur_valid;
        }

        let children_sum = match (node.left, node.right) {
            (None, None) => V::zero(),
            (Some(left), None) => self.data[left.into_usize()].aggregate,
            (None, Some(right)) => self.data[right.into_usize()].aggregate,
            (Some(left), Some(right)) => {
                self.data[left.into_usize()].aggregate + self.data[right.into_usize()].aggregate
            }
        };
        let cur_valid = node.aggregate == children_sum;
        if !cur_valid {
            log::error!(
                "Aggregate of node over {}..{} is {:?} but its children sum to {:?}.",
                node_range.start,
                node_range.end,
                node.aggregate,
                children_sum
            );
        }

        let children_valid = match node_range.split() {
            Some((left_range, right_range)) => {
                node.left
                    .map_or(true, |child| self.validate_inner(child, &left_range))
                    && node
                        .right
                        .map_or(true, |child| self.validate_inner(child, &right_range))
            }
            None => true,
        };

        cur_valid && children_valid
    }
}
