//! Positional removal.
//!
//! All removal functions follow the same policy: an empty sequence or an index
//! that the operation does not accept leaves the sequence untouched. Nothing
//! in this module panics.
//!
//! The returning functions take the sequence by value and hand it back, so the
//! result reuses the caller's allocation. Always continue with the returned
//! value.
//!
//! # Examples
//!
//! ```rust
//! use slc::remove::{remove_at, remove_first, remove_last};
//!
//! let sequence = vec![1, 2, 3, 4, 5];
//! let sequence = remove_last(sequence);
//! assert_eq!(sequence, vec![1, 2, 3, 4]);
//!
//! let sequence = remove_first(sequence);
//! assert_eq!(sequence, vec![2, 3, 4]);
//!
//! // The last index is not accepted by `remove_at`.
//! let sequence = remove_at(sequence, 2);
//! assert_eq!(sequence, vec![2, 3, 4]);
//!
//! let sequence = remove_at(sequence, 1);
//! assert_eq!(sequence, vec![2, 4]);
//! ```

use crate::element::SliceElement;

/// Removes the last element.
///
/// An empty sequence is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use slc::remove::remove_last;
///
/// assert_eq!(remove_last(vec![1, 2, 3]), vec![1, 2]);
/// assert_eq!(remove_last(Vec::<i32>::new()), Vec::<i32>::new());
/// ```
#[inline]
#[must_use]
pub fn remove_last<T: SliceElement>(mut sequence: Vec<T>) -> Vec<T> {
    sequence.pop();
    sequence
}

/// Removes the first element.
///
/// An empty sequence is returned unchanged. Later elements shift left by one.
///
/// # Examples
///
/// ```rust
/// use slc::remove::remove_first;
///
/// assert_eq!(remove_first(vec!["a", "b", "c"]), vec!["b", "c"]);
/// assert_eq!(remove_first(Vec::<&str>::new()), Vec::<&str>::new());
/// ```
#[must_use]
pub fn remove_first<T: SliceElement>(mut sequence: Vec<T>) -> Vec<T> {
    if !sequence.is_empty() {
        sequence.remove(0);
    }
    sequence
}

/// Logs the sequence as it would look without its first element.
///
/// The sequence itself is left untouched and nothing is returned; use
/// [`remove_first`] to obtain the trimmed sequence. The trimmed view is emitted
/// at `info` level on the `slc::remove` target.
///
/// # Examples
///
/// ```rust
/// use slc::remove::log_remove_first;
///
/// let sequence = vec![1, 2, 3];
/// log_remove_first(&sequence); // logs "[2, 3]"
/// assert_eq!(sequence, vec![1, 2, 3]);
/// ```
pub fn log_remove_first<T: SliceElement>(sequence: &[T]) {
    let trimmed = sequence.get(1..).unwrap_or(sequence);
    log::info!(target: "slc::remove", "{trimmed:?}");
}

/// Removes the element at `index`, shifting later elements left.
///
/// Only interior positions and the first position are accepted: the call is a
/// no-op when the sequence is empty or when `index >= len - 1`. Targeting the
/// last element is silently ignored; use [`remove_last`] for that position.
///
/// # Examples
///
/// ```rust
/// use slc::remove::remove_at;
///
/// assert_eq!(remove_at(vec![10, 20, 30, 40], 1), vec![10, 30, 40]);
/// assert_eq!(remove_at(vec![10, 20, 30, 40], 3), vec![10, 20, 30, 40]);
/// assert_eq!(remove_at(vec![10, 20, 30, 40], 99), vec![10, 20, 30, 40]);
/// ```
#[must_use]
pub fn remove_at<T: SliceElement>(mut sequence: Vec<T>, index: usize) -> Vec<T> {
    try_remove_at(&mut sequence, index);
    sequence
}

/// Removes the element at `index` in place and returns it.
///
/// Applies the same guard as [`remove_at`] and returns `None` whenever that
/// guard turns the call into a no-op.
///
/// # Examples
///
/// ```rust
/// use slc::remove::try_remove_at;
///
/// let mut sequence = vec![10, 20, 30];
/// assert_eq!(try_remove_at(&mut sequence, 0), Some(10));
/// assert_eq!(try_remove_at(&mut sequence, 1), None);
/// assert_eq!(sequence, vec![20, 30]);
/// ```
pub fn try_remove_at<T: SliceElement>(sequence: &mut Vec<T>, index: usize) -> Option<T> {
    if accepts_index(sequence.len(), index) {
        Some(sequence.remove(index))
    } else {
        None
    }
}

/// Returns `true` if [`remove_at`] acts on `index` for a sequence of `length`.
#[inline]
pub(crate) const fn accepts_index(length: usize, index: usize) -> bool {
    length != 0 && index < length - 1
}
