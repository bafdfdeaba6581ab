//! Searching in sorted slices.

use std::cmp::Ordering;

/// Finds `target` in a slice sorted in increasing order, in `O(log n)` time.
///
/// Returns the index of a matching element, or `None` if there isn't one.
/// If several elements are equal to `target`, any one of them may be returned.
///
///```
/// use copse::search::binary_search;
///
/// let sorted = [1, 3, 5, 7, 9];
/// assert_eq!(binary_search(&sorted, &7), Some(3));
/// assert_eq!(binary_search(&sorted, &4), None);
/// assert_eq!(binary_search::<i32>(&[], &4), None);
///```
pub fn binary_search<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    // the answer, if any, is in `low..high`
    let mut low = 0;
    let mut high = sorted.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match sorted[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}
