//! Structural equality of sequences.
//!
//! [`equal`] compares two sequences of the same element type. When the element
//! types may differ, [`structurally_equal`] compares element kinds first and
//! only then lengths and values, so sequences of different kinds are never
//! equal.
//!
//! # Examples
//!
//! ```rust
//! use slc::equal::{equal, structurally_equal};
//!
//! assert!(!equal(&[1, 2, 3], &[1, 2, 4]));
//! assert!(equal(&[1, 2, 3], &[1, 2, 3]));
//! assert!(!structurally_equal(&[1, 2, 3], &["1", "2", "3"]));
//! ```

use crate::element::SliceElement;

/// Returns `true` if both sequences have the same length and equal elements at
/// every position.
#[inline]
#[must_use]
pub fn equal<T: SliceElement>(left: &[T], right: &[T]) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(a, b)| a == b)
}

/// Returns `true` if both sequences hold the same kind of element, have the
/// same length and have equal elements at every position.
///
/// Two empty sequences of different kinds are not equal. `String`, `&str` and
/// `Box<str>` all belong to [`ElementKind::String`], so sequences of these
/// types compare by content even though their Rust types differ.
///
/// [`ElementKind::String`]: crate::element::ElementKind::String
///
/// # Examples
///
/// ```rust
/// use slc::equal::structurally_equal;
///
/// let owned = vec![String::from("a"), String::from("b")];
/// assert!(structurally_equal(&owned, &["a", "b"]));
///
/// let empty_integers: [i32; 0] = [];
/// let empty_floats: [f32; 0] = [];
/// assert!(!structurally_equal(&empty_integers, &empty_floats));
/// ```
#[must_use]
pub fn structurally_equal<A, B>(left: &[A], right: &[B]) -> bool
where
    A: SliceElement,
    B: SliceElement,
{
    A::KIND == B::KIND
        && left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(a, b)| a.value() == b.value())
}
