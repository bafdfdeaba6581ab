//! Disjoint-set forests (union-find).
//!
//! A [`DisjointSetForest`] keeps track of a partition of `0..n` into groups.
//! Groups can only be merged, never split.
//!
//! Merging uses union by rank, and [`DisjointSetForest::find`] compresses the
//! path it walks, so that every operation takes amortized `O(α(n))` time.

use log::trace;

use crate::error::{check_index, Result};

/// A partition of the elements `0..n` into disjoint groups.
///
///```
/// use copse::disjoint_set::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new(5);
/// forest.unite(0, 1)?;
/// forest.unite(1, 2)?;
///
/// assert!(forest.connected(0, 2)?);
/// assert!(!forest.connected(0, 3)?);
/// assert_eq!(forest.group_count(), 3);
/// # forest.assert_correctness();
/// # Ok::<(), copse::Error>(())
///```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DisjointSetForest {
    /// Every element points at its parent. Roots point at themselves.
    parent: Vec<usize>,
    /// Upper bound on the height of the tree under each root.
    rank: Vec<u8>,
    /// The size of each group. Only meaningful at roots.
    size: Vec<usize>,
    /// The number of groups, i.e, the number of roots.
    groups: usize,
}

impl DisjointSetForest {
    /// Creates a forest of `n` singleton groups.
    pub fn new(n: usize) -> Self {
        DisjointSetForest {
            parent: (0..n).collect(),
            rank: vec![0; n],
            size: vec![1; n],
            groups: n,
        }
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if the forest has no elements at all.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// The current number of disjoint groups.
    pub fn group_count(&self) -> usize {
        self.groups
    }

    /// Returns the representative of the group containing `x`.
    ///
    /// Every element visited on the way up is rewritten to point directly at the
    /// representative, so that later calls are fast.
    ///
    /// Fails with [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if `x` isn't an element.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        check_index(x, self.len())?;
        Ok(self.find_root(x))
    }

    /// Merges the groups containing `x` and `y`.
    /// Returns `false` if they were already in the same group, in which case
    /// nothing changes.
    ///
    /// The root of smaller rank is attached under the root of larger rank.
    /// On a tie, `y`'s root goes under `x`'s root, whose rank grows by one.
    ///
    ///```
    /// use copse::disjoint_set::DisjointSetForest;
    ///
    /// let mut forest = DisjointSetForest::new(4);
    /// assert_eq!(forest.unite(3, 2), Ok(true));
    /// assert_eq!(forest.unite(2, 3), Ok(false));
    /// assert_eq!(forest.find(2), Ok(3));
    /// assert!(forest.unite(0, 4).is_err());
    ///```
    pub fn unite(&mut self, x: usize, y: usize) -> Result<bool> {
        check_index(x, self.len())?;
        check_index(y, self.len())?;

        let mut root_x = self.find_root(x);
        let mut root_y = self.find_root(y);
        if root_x == root_y {
            return Ok(false);
        }

        if self.rank[root_x] < self.rank[root_y] {
            std::mem::swap(&mut root_x, &mut root_y);
        }
        // now `root_x` has the bigger (or equal) rank and stays a root
        self.parent[root_y] = root_x;
        if self.rank[root_x] == self.rank[root_y] {
            self.rank[root_x] += 1;
        }
        self.size[root_x] += self.size[root_y];
        self.groups -= 1;

        trace!(
            "attached root {} under root {} (group size {})",
            root_y,
            root_x,
            self.size[root_x]
        );
        Ok(true)
    }

    /// Returns whether `x` and `y` are in the same group.
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        check_index(x, self.len())?;
        check_index(y, self.len())?;
        Ok(self.find_root(x) == self.find_root(y))
    }

    /// The number of elements in the group containing `x`.
    pub fn group_size(&mut self, x: usize) -> Result<usize> {
        let root = self.find(x)?;
        Ok(self.size[root])
    }

    /// Lists all the groups. The members of each group are in increasing order,
    /// and the groups are ordered by their smallest member.
    ///
    ///```
    /// use copse::disjoint_set::DisjointSetForest;
    ///
    /// let mut forest = DisjointSetForest::new(5);
    /// forest.unite(4, 1)?;
    /// forest.unite(2, 0)?;
    /// assert_eq!(forest.groups(), vec![vec![0, 2], vec![1, 4], vec![3]]);
    /// # Ok::<(), copse::Error>(())
    ///```
    pub fn groups(&mut self) -> Vec<Vec<usize>> {
        // position of each root's group in the result
        let mut slot: Vec<Option<usize>> = vec![None; self.len()];
        let mut res: Vec<Vec<usize>> = Vec::with_capacity(self.groups);
        for x in 0..self.len() {
            let root = self.find_root(x);
            match slot[root] {
                Some(i) => res[i].push(x),
                None => {
                    slot[root] = Some(res.len());
                    let mut group = Vec::with_capacity(self.size[root]);
                    group.push(x);
                    res.push(group);
                }
            }
        }
        res
    }

    /// Checks that the invariants hold: parent pointers lead to a root without cycles,
    /// ranks strictly grow along parent pointers, and the group sizes and count add up.
    /// If any of them doesn't, panics.
    pub fn assert_correctness(&self) {
        let n = self.len();
        assert_eq!(self.rank.len(), n);
        assert_eq!(self.size.len(), n);

        let mut members = vec![0; n];
        for x in 0..n {
            let mut current = x;
            let mut steps = 0;
            while self.parent[current] != current {
                let parent = self.parent[current];
                assert!(
                    self.rank[parent] > self.rank[current],
                    "rank of {parent} isn't bigger than the rank of its son {current}"
                );
                current = parent;
                steps += 1;
                assert!(steps <= n, "cycle in parent pointers starting at {x}");
            }
            members[current] += 1;
        }

        let mut roots = 0;
        for x in 0..n {
            if self.parent[x] == x {
                roots += 1;
                assert_eq!(self.size[x], members[x], "wrong group size at root {x}");
            }
        }
        assert_eq!(roots, self.groups, "wrong group count");
    }

    /// `find` without the bounds check. Two passes: find the root, then
    /// point everything on the path at it.
    fn find_root(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }
}
