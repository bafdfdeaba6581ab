//! Segment trees with lazy range additions.
//!
//! See [`RangeSumTree`].

use std::ops::{Bound, RangeBounds};

use log::{debug, trace};

use super::SumValue;
use crate::error::{check_index, check_range, Error, Result};

/// Index of the root node. Node `k` has the sons `2k` and `2k+1`.
const ROOT: usize = 1;

/// The inclusive segment of indices `start..=end` that a node is responsible for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Span {
    start: usize,
    end: usize,
}

impl Span {
    fn len(self) -> usize {
        self.end - self.start + 1
    }

    fn is_leaf(self) -> bool {
        self.start == self.end
    }

    fn left(self) -> Span {
        let mid = self.start + (self.end - self.start) / 2;
        Span {
            start: self.start,
            end: mid,
        }
    }

    fn right(self) -> Span {
        let mid = self.start + (self.end - self.start) / 2;
        Span {
            start: mid + 1,
            end: self.end,
        }
    }

    fn is_disjoint(self, l: usize, r: usize) -> bool {
        self.end < l || r < self.start
    }

    fn is_inside(self, l: usize, r: usize) -> bool {
        l <= self.start && self.end <= r
    }
}

/// A fixed-length array of integers that supports adding a value to a whole
/// segment, and summing a segment, both in `O(log n)` time.
///
/// Segments are given as inclusive index pairs `l, r`, or as Rust ranges
/// through [`RangeSumTree::sum_range`] and [`RangeSumTree::add_range`].
///
/// Additions are lazy: an addition that covers a node's whole segment is stored
/// as a pending value at the node's sons, and only pushed further down when those
/// sons are visited. Therefore querying mutates the tree as well, except through
/// [`RangeSumTree::query_imm`].
///
///```
/// use copse::trees::RangeSumTree;
///
/// let mut tree: RangeSumTree = vec![1, 2, 3, 4, 5].into();
/// assert_eq!(tree.query(0, 4), Ok(15));
///
/// tree.update(1, 3, 10)?;
/// assert_eq!(tree.query(0, 4), Ok(45));
/// assert_eq!(tree.query(1, 1), Ok(12));
/// assert_eq!(tree.to_vec(), vec![1, 12, 13, 14, 5]);
/// # tree.assert_correctness();
/// # Ok::<(), copse::Error>(())
///```
#[derive(Clone, Debug)]
pub struct RangeSumTree<V = i64> {
    len: usize,
    /// `sum[node]` is the sum of the node's segment, not counting the node's own
    /// pending value, nor the pending values of its ancestors.
    sum: Vec<V>,
    /// A value owed to every element of the node's segment, that hasn't been
    /// added to `sum[node]` nor passed on to the sons yet.
    pending: Vec<V>,
}

impl<V: SumValue> RangeSumTree<V> {
    /// Builds a tree over `values`, in `O(n)` time.
    ///
    /// An empty input gives an empty tree, on which every segment operation fails.
    pub fn new(values: Vec<V>) -> Self {
        let len = values.len();
        let size = 4 * len.max(1);
        let mut tree = RangeSumTree {
            len,
            sum: vec![V::default(); size],
            pending: vec![V::default(); size],
        };
        if let Some(span) = tree.root_span() {
            tree.build(ROOT, span, &values);
        }
        debug!("built a range sum tree over {} values", len);
        tree
    }

    /// The number of values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `delta` to every value with index in `l..=r`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] if `l` or `r` isn't a valid index,
    /// and with [`Error::InvalidRange`] if `l > r`. In both cases the tree is unchanged.
    pub fn update(&mut self, l: usize, r: usize, delta: V) -> Result<()> {
        check_range(l, r, self.len)?;
        trace!("adding {:?} to {}..={}", delta, l, r);
        self.update_internal(ROOT, self.full_span(), l, r, delta);
        Ok(())
    }

    /// Returns the sum of the values with index in `l..=r`.
    /// Fails the same way as [`RangeSumTree::update`].
    pub fn query(&mut self, l: usize, r: usize) -> Result<V> {
        check_range(l, r, self.len)?;
        Ok(self.query_internal(ROOT, self.full_span(), l, r))
    }

    /// Same as [`RangeSumTree::query`], but doesn't push pending additions down,
    /// so it only needs a shared reference. Still `O(log n)`.
    ///
    ///```
    /// use copse::trees::RangeSumTree;
    ///
    /// let mut tree: RangeSumTree<i32> = (1..=8).collect();
    /// tree.update(0, 7, 1)?;
    /// let frozen = &tree;
    /// assert_eq!(frozen.query_imm(2, 5), Ok(22));
    /// assert_eq!(tree.query(2, 5), Ok(22));
    /// # Ok::<(), copse::Error>(())
    ///```
    pub fn query_imm(&self, l: usize, r: usize) -> Result<V> {
        check_range(l, r, self.len)?;
        Ok(self.query_imm_internal(ROOT, self.full_span(), l, r, V::default()))
    }

    /// Returns the value at `index`.
    pub fn get(&mut self, index: usize) -> Result<V> {
        self.query(index, index)
    }

    /// Adds `delta` to the value at `index`.
    pub fn add(&mut self, index: usize, delta: V) -> Result<()> {
        self.update(index, index, delta)
    }

    /// The sum of all of the values. `O(1)`.
    pub fn total(&self) -> V {
        if self.is_empty() {
            return V::default();
        }
        self.sum[ROOT] + self.pending[ROOT].times(self.len)
    }

    /// Returns the sum over a Rust range of indices. An empty range sums to zero.
    ///
    ///```
    /// use copse::trees::RangeSumTree;
    ///
    /// let mut tree: RangeSumTree = (0..10).collect();
    /// assert_eq!(tree.sum_range(2..5), Ok(9));
    /// assert_eq!(tree.sum_range(..=1), Ok(1));
    /// assert_eq!(tree.sum_range(7..), Ok(24));
    /// assert_eq!(tree.sum_range(4..4), Ok(0));
    /// assert!(tree.sum_range(5..11).is_err());
    ///```
    pub fn sum_range<R: RangeBounds<usize>>(&mut self, range: R) -> Result<V> {
        match self.resolve(&range)? {
            Some((l, r)) => self.query(l, r),
            None => Ok(V::default()),
        }
    }

    /// Adds `delta` to every value in a Rust range of indices.
    pub fn add_range<R: RangeBounds<usize>>(&mut self, range: R, delta: V) -> Result<()> {
        match self.resolve(&range)? {
            Some((l, r)) => self.update(l, r, delta),
            None => Ok(()),
        }
    }

    /// Returns the current values, in `O(n)` time.
    pub fn to_vec(&self) -> Vec<V> {
        let mut res = Vec::with_capacity(self.len);
        if let Some(span) = self.root_span() {
            self.collect_internal(ROOT, span, V::default(), &mut res);
        }
        res
    }

    /// Checks that every inner node's sum is the sum of its sons, counting the sons'
    /// pending values. If it is not, panics.
    pub fn assert_correctness(&self) {
        assert_eq!(self.sum.len(), self.pending.len());
        if let Some(span) = self.root_span() {
            self.assert_correctness_internal(ROOT, span);
        }
    }

    fn root_span(&self) -> Option<Span> {
        if self.is_empty() {
            None
        } else {
            Some(self.full_span())
        }
    }

    /// Only valid for non empty trees.
    fn full_span(&self) -> Span {
        Span {
            start: 0,
            end: self.len - 1,
        }
    }

    /// Translates a Rust range into an inclusive pair of indices,
    /// or `None` for an empty range.
    ///
    /// Bounds past the end are [`Error::IndexOutOfRange`], checked start first.
    /// A start past the end of the range is [`Error::InvalidRange`], carrying the
    /// end bound as it was written.
    fn resolve<R: RangeBounds<usize>>(&self, range: &R) -> Result<Option<(usize, usize)>> {
        let len = self.len;
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s
                .checked_add(1)
                .ok_or(Error::IndexOutOfRange { index: s, len })?,
            Bound::Unbounded => 0,
        };
        // `start == len` is fine, as the start of an empty range
        if start > len {
            return Err(Error::IndexOutOfRange { index: start, len });
        }

        // exclusive end, and the end bound as written
        let (end, written_end) = match range.end_bound() {
            Bound::Included(&e) => {
                check_index(e, len)?;
                (e + 1, e)
            }
            Bound::Excluded(&e) => {
                if e > len {
                    return Err(Error::IndexOutOfRange { index: e - 1, len });
                }
                (e, e)
            }
            Bound::Unbounded => (len, len),
        };

        if start > end {
            return Err(Error::InvalidRange {
                start,
                end: written_end,
            });
        }
        if start == end {
            Ok(None)
        } else {
            Ok(Some((start, end - 1)))
        }
    }

    fn build(&mut self, node: usize, span: Span, values: &[V]) {
        if span.is_leaf() {
            self.sum[node] = values[span.start];
            return;
        }
        self.build(2 * node, span.left(), values);
        self.build(2 * node + 1, span.right(), values);
        self.rebuild(node);
    }

    /// Stores an addition to the whole segment of `node`.
    ///
    /// This leaves the node "dirty" - after calling this you need to call `access`
    /// before reading its sum.
    fn act(&mut self, node: usize, delta: V) {
        self.pending[node] += delta;
    }

    /// Adds the node's pending value into its sum, and passes it on to its sons.
    /// After this, `sum[node]` is accurate, given that all of its ancestors were accessed.
    fn access(&mut self, node: usize, span: Span) {
        let pending = std::mem::take(&mut self.pending[node]);
        if pending.is_zero() {
            return;
        }
        self.sum[node] += pending.times(span.len());
        if !span.is_leaf() {
            self.act(2 * node, pending);
            self.act(2 * node + 1, pending);
        }
    }

    /// Remakes the sum of the node from its sons. The sons must have been accessed.
    fn rebuild(&mut self, node: usize) {
        debug_assert!(self.pending[2 * node].is_zero() && self.pending[2 * node + 1].is_zero());
        self.sum[node] = self.sum[2 * node] + self.sum[2 * node + 1];
    }

    fn update_internal(&mut self, node: usize, span: Span, l: usize, r: usize, delta: V) {
        self.access(node, span);
        if span.is_disjoint(l, r) {
            return;
        }
        if span.is_inside(l, r) {
            // the sons will get it when they are visited
            self.act(node, delta);
            self.access(node, span);
            return;
        }

        self.update_internal(2 * node, span.left(), l, r, delta);
        self.update_internal(2 * node + 1, span.right(), l, r, delta);
        self.rebuild(node);
    }

    fn query_internal(&mut self, node: usize, span: Span, l: usize, r: usize) -> V {
        if span.is_disjoint(l, r) {
            return V::default();
        }
        self.access(node, span);
        if span.is_inside(l, r) {
            return self.sum[node];
        }

        self.query_internal(2 * node, span.left(), l, r)
            + self.query_internal(2 * node + 1, span.right(), l, r)
    }

    /// `owed` is the sum of the pending values of the node's ancestors.
    fn query_imm_internal(&self, node: usize, span: Span, l: usize, r: usize, owed: V) -> V {
        if span.is_disjoint(l, r) {
            return V::default();
        }
        let owed = owed + self.pending[node];
        if span.is_inside(l, r) {
            return self.sum[node] + owed.times(span.len());
        }

        self.query_imm_internal(2 * node, span.left(), l, r, owed)
            + self.query_imm_internal(2 * node + 1, span.right(), l, r, owed)
    }

    fn collect_internal(&self, node: usize, span: Span, owed: V, res: &mut Vec<V>) {
        let owed = owed + self.pending[node];
        if span.is_leaf() {
            res.push(self.sum[node] + owed);
            return;
        }
        self.collect_internal(2 * node, span.left(), owed, res);
        self.collect_internal(2 * node + 1, span.right(), owed, res);
    }

    fn assert_correctness_internal(&self, node: usize, span: Span) {
        if span.is_leaf() {
            return;
        }
        let (left, right) = (span.left(), span.right());
        let left_sum = self.sum[2 * node] + self.pending[2 * node].times(left.len());
        let right_sum = self.sum[2 * node + 1] + self.pending[2 * node + 1].times(right.len());
        assert_eq!(
            self.sum[node],
            left_sum + right_sum,
            "sum of node {node} over {span:?} doesn't match its sons"
        );
        self.assert_correctness_internal(2 * node, left);
        self.assert_correctness_internal(2 * node + 1, right);
    }
}

impl<V: SumValue> From<Vec<V>> for RangeSumTree<V> {
    fn from(values: Vec<V>) -> Self {
        Self::new(values)
    }
}

impl<V: SumValue> FromIterator<V> for RangeSumTree<V> {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
