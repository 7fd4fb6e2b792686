//! Order-preserving deduplication.
//!
//! [`deduplicate`] keeps the first occurrence of every distinct value and
//! drops all later repeats in a single pass.
//!
//! [`deduplicate_legacy`] reproduces an older algorithm that removes repeats
//! while walking the *original* indices of a sequence that shrinks under it.
//! Because removals shift later elements left, some elements are examined
//! twice and others never, so repeats can survive and unique trailing values
//! can be dropped. It is kept only for callers
//! that depend on that exact output.
//!
//! Both functions detect repeats through [`SliceElement::dedup_key`]; a `NaN`
//! has no key and is never treated as a repeat.
//!
//! The hasher behind the seen-set is chosen at compile time: `FxHash` with the
//! `fxhash` feature, `aHash` with the `ahash` feature, otherwise the standard
//! library's `RandomState`.
//!
//! # Examples
//!
//! ```rust
//! use slc::dedup::{deduplicate, deduplicate_legacy};
//!
//! assert_eq!(deduplicate(vec![1, 2, 2, 3, 1]), vec![1, 2, 3]);
//!
//! // The legacy walk misses the trailing `1`.
//! assert_eq!(deduplicate_legacy(vec![1, 2, 1, 1, 3]), vec![1, 2, 1]);
//! assert_eq!(deduplicate(vec![1, 2, 1, 1, 3]), vec![1, 2, 3]);
//! ```

use std::collections::{HashMap, HashSet};

use crate::element::SliceElement;
use crate::remove::accepts_index;

#[cfg(feature = "fxhash")]
type SeenHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type SeenHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type SeenHasher = std::collections::hash_map::RandomState;

/// The set of keys already seen during a deduplication pass.
type SeenSet<K> = HashSet<K, SeenHasher>;

/// Removes every repeated value, keeping first occurrences in their original
/// order.
///
/// Runs in one pass over the sequence and reuses its allocation.
///
/// # Examples
///
/// ```rust
/// use slc::dedup::deduplicate;
///
/// assert_eq!(deduplicate(vec!["b", "a", "b", "c", "a"]), vec!["b", "a", "c"]);
/// assert_eq!(deduplicate(vec![0.0_f32, -0.0, 1.0]), vec![0.0, 1.0]);
/// assert!(deduplicate(Vec::<i8>::new()).is_empty());
/// ```
#[must_use]
pub fn deduplicate<T: SliceElement>(mut sequence: Vec<T>) -> Vec<T> {
    let original_length = sequence.len();
    let mut seen: SeenSet<T::Key> =
        HashSet::with_capacity_and_hasher(original_length, SeenHasher::default());

    sequence.retain(|element| element.dedup_key().is_none_or(|key| seen.insert(key)));

    log::trace!(
        target: "slc::dedup",
        "removed {} of {} elements",
        original_length - sequence.len(),
        original_length
    );
    sequence
}

/// Removes repeated values using the legacy index walk.
///
/// For every original index `i`, the value currently stored at `i` is checked
/// against the values seen so far. A repeat at a non-final original index is
/// removed with the [`remove_at`](crate::remove::remove_at) guard (so it is
/// skipped once `i` reaches the shrunken end), and a repeat at the final
/// original index removes the current last element. Removal shifts later
/// elements left but leaves the vacated tail slot holding a copy of the old
/// last element, and later iterations read those stale slots.
///
/// The result may still hold repeats and may lose values that occurred only
/// once. Prefer [`deduplicate`].
///
/// The walk does not call [`remove_at`](crate::remove::remove_at) or
/// [`remove_last`](crate::remove::remove_last) directly: those return a
/// shortened `Vec` and drop the vacated slot, while the walk must keep reading
/// the stale slots past the current length.
///
/// # Examples
///
/// ```rust
/// use slc::dedup::deduplicate_legacy;
///
/// assert_eq!(deduplicate_legacy(vec![1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// assert_eq!(deduplicate_legacy(vec![1, 2, 1, 1, 3]), vec![1, 2, 1]);
/// ```
#[must_use]
pub fn deduplicate_legacy<T: SliceElement>(mut storage: Vec<T>) -> Vec<T> {
    let original_length = storage.len();
    let Some(last_index) = original_length.checked_sub(1) else {
        return storage;
    };
    let mut length = original_length;
    let mut first_seen: HashMap<T::Key, usize, SeenHasher> =
        HashMap::with_capacity_and_hasher(original_length, SeenHasher::default());

    for index in 0..original_length {
        let Some(key) = storage[index].dedup_key() else {
            continue;
        };
        if !first_seen.contains_key(&key) {
            first_seen.insert(key, index);
        } else if index != last_index {
            if accepts_index(length, index) {
                shift_out(&mut storage, index, length);
                length -= 1;
            }
        } else if length != 0 {
            length -= 1;
        }
    }

    log::trace!(
        target: "slc::dedup",
        "legacy walk removed {} of {} elements",
        original_length - length,
        original_length
    );
    storage.truncate(length);
    storage
}

/// Shifts `storage[index + 1..length]` one slot left, leaving
/// `storage[length - 1]` equal to its previous value.
///
/// Requires `index < length - 1`.
fn shift_out<T: Clone>(storage: &mut [T], index: usize, length: usize) {
    storage[index..length].rotate_left(1);
    let stale = storage[length - 2].clone();
    storage[length - 1] = stale;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![7], vec![7])]
    #[case(vec![1, 1, 1, 1], vec![1])]
    #[case(vec![1, 2, 2, 3, 1], vec![1, 2, 3])]
    #[case(vec![1, 2, 1, 1, 3], vec![1, 2, 3])]
    #[case(vec![3, 2, 1], vec![3, 2, 1])]
    fn test_deduplicate(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(deduplicate(input), expected);
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![7], vec![7])]
    #[case(vec![1, 1, 1], vec![1])]
    #[case(vec![1, 1, 2, 2], vec![1, 2])]
    #[case(vec![1, 2, 2, 3, 1], vec![1, 2, 3])]
    #[case(vec![1, 2, 1, 1, 3], vec![1, 2, 1])]
    #[case(vec![5, 5, 6, 6, 7], vec![5, 6, 6])]
    fn test_deduplicate_legacy(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(deduplicate_legacy(input), expected);
    }

    #[rstest]
    fn test_shift_out_leaves_stale_tail() {
        let mut storage = vec![1, 2, 3, 4, 5];
        shift_out(&mut storage, 1, 5);
        assert_eq!(storage, vec![1, 3, 4, 5, 5]);
    }

    #[rstest]
    fn test_shift_out_within_shorter_prefix() {
        let mut storage = vec![1, 2, 3, 4, 5];
        shift_out(&mut storage, 0, 3);
        assert_eq!(storage, vec![2, 3, 3, 4, 5]);
    }

    #[rstest]
    fn test_deduplicate_keeps_every_nan() {
        let result = deduplicate(vec![f32::NAN, 1.0, f32::NAN, 1.0]);
        assert_eq!(result.len(), 3);
        assert!(result[0].is_nan());
        assert!((result[1] - 1.0).abs() < f32::EPSILON);
        assert!(result[2].is_nan());
    }

    #[rstest]
    fn test_deduplicate_owned_strings() {
        let input: Vec<String> = ["x", "y", "x", "z", "y"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(deduplicate(input), vec!["x", "y", "z"]);
    }

    #[rstest]
    fn test_deduplicate_reuses_storage() {
        let sequence = vec![4_i64, 4, 5];
        let pointer = sequence.as_ptr();
        let result = deduplicate(sequence);
        assert_eq!(result.as_ptr(), pointer);
        assert_eq!(result, vec![4, 5]);
    }
}
