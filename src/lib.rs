//! Classic algorithmic building blocks.
//!
//! The main structures are:
//! * [`DisjointSetForest`]: union-find over `0..n`, with union by rank and path compression.
//! * [`PrefixTree`]: a trie over a small fixed alphabet.
//! * [`RangeSumTree`]: a segment tree with lazy range additions and range sums.
//!
//! They are independent of each other. Operations that get bad input (an index out of
//! range, a symbol outside the alphabet) return an [`Error`] and leave the structure as it was.
//!
//! There are also some pure helpers in [`number_theory`] and [`search`],
//! and a worked example in [`example`].
//!
//! The crate logs through the [`log`] facade, at the `debug` and `trace` levels.

pub mod disjoint_set;
pub mod error;
pub mod example;
pub mod number_theory;
pub mod prefix_tree;
pub mod search;
pub mod trees;

pub use disjoint_set::DisjointSetForest;
pub use error::{Error, Result};
pub use prefix_tree::PrefixTree;
pub use trees::RangeSumTree;
