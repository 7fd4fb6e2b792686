//! In-place reversal.

use crate::element::SliceElement;

/// Reverses the sequence in place and returns it.
///
/// Elements are swapped pairwise from both ends toward the middle; no new
/// storage is allocated.
///
/// # Examples
///
/// ```rust
/// use slc::reverse::reverse_in_place;
///
/// assert_eq!(reverse_in_place(vec![1, 2, 3]), vec![3, 2, 1]);
/// assert_eq!(reverse_in_place(vec!["a", "b"]), vec!["b", "a"]);
/// assert_eq!(reverse_in_place(Vec::<f32>::new()), Vec::<f32>::new());
/// ```
#[must_use]
pub fn reverse_in_place<T: SliceElement>(mut sequence: Vec<T>) -> Vec<T> {
    reverse_slice(&mut sequence);
    sequence
}

/// Reverses a borrowed slice in place.
///
/// # Examples
///
/// ```rust
/// use slc::reverse::reverse_slice;
///
/// let mut values = [1_i8, 2, 3, 4];
/// reverse_slice(&mut values[1..]);
/// assert_eq!(values, [1, 4, 3, 2]);
/// ```
pub fn reverse_slice<T: SliceElement>(slice: &mut [T]) {
    let Some(mut right) = slice.len().checked_sub(1) else {
        return;
    };
    let mut left = 0;
    while left < right {
        slice.swap(left, right);
        left += 1;
        right -= 1;
    }
}
