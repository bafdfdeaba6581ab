//! This module contains trees built over a fixed array of values.
//!
//! Currently that is the [`RangeSumTree`], which adds to segments and sums over
//! segments, both in logarithmic time.

#[macro_use]
mod macros;

pub mod range_sum;
pub use range_sum::RangeSumTree;

use std::fmt::Debug;
use std::ops::{Add, AddAssign};

/// The values a [`RangeSumTree`] can hold: integers that can be summed,
/// with `Default::default()` as zero.
///
/// Arithmetic is the type's native arithmetic, so overflow panics in debug builds.
/// Use a wide type if the sums can get large.
pub trait SumValue: Copy + Default + Eq + Debug + Add<Output = Self> + AddAssign {
    /// Returns `self` added up `count` times.
    ///
    /// The integer impls panic if `count` doesn't fit in the integer type, so a
    /// `RangeSumTree<i32>` can't hold more than `i32::MAX` values.
    fn times(self, count: usize) -> Self;

    /// Whether this is the neutral value.
    fn is_zero(self) -> bool {
        self == Self::default()
    }
}

impl_sum_value!(i32, i64, i128, isize);
