//! A worked example: finding two entries that add up to a target.

use std::collections::HashMap;

/// Returns indices `(i, j)`, `i < j`, with `nums[i] + nums[j] == target`,
/// or `None` if there is no such pair.
///
/// One pass over `nums`, remembering the index of every value seen so far.
/// The returned `j` is the smallest possible one. If a value repeats, its latest
/// index before `j` is used for `i`.
///
/// Sums are computed in `i64`, so they can't overflow.
///
///```
/// use copse::example::pair_sum;
///
/// assert_eq!(pair_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
/// assert_eq!(pair_sum(&[3, 2, 4], 6), Some((1, 2)));
/// assert_eq!(pair_sum(&[3, 3], 6), Some((0, 1)));
/// assert_eq!(pair_sum(&[1, 2], 7), None);
///```
pub fn pair_sum(nums: &[i32], target: i64) -> Option<(usize, usize)> {
    // value -> the latest index it was seen at
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());
    for (j, &num) in nums.iter().enumerate() {
        let num = i64::from(num);
        if let Some(&i) = seen.get(&(target - num)) {
            return Some((i, j));
        }
        seen.insert(num, j);
    }
    None
}

/// What the `pair_sum` demo prints when there is no pair.
pub const NO_SOLUTION: &str = "No solution found";

/// The `pair_sum` demo's answer line: the two indices separated by a space,
/// or [`NO_SOLUTION`].
///
///```
/// use copse::example::pair_sum_report;
///
/// assert_eq!(pair_sum_report(&[2, 7, 11, 15], 9), "0 1");
/// assert_eq!(pair_sum_report(&[1, 2], 7), "No solution found");
///```
pub fn pair_sum_report(nums: &[i32], target: i64) -> String {
    match pair_sum(nums, target) {
        Some((i, j)) => format!("{} {}", i, j),
        None => NO_SOLUTION.to_string(),
    }
}
