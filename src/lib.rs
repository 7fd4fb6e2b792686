//! # slc
//!
//! Small, independent helpers for working with ordered sequences.
//!
//! ## Overview
//!
//! Every helper is a stateless free function over a `Vec` or slice:
//!
//! - **Removal**: [`remove_last`], [`remove_first`], [`remove_at`]
//! - **Ranges**: [`range`] and the lazy [`StepRange`]
//! - **Reversal**: [`reverse_in_place`]
//! - **Equality**: [`equal`] and the kind-aware [`structurally_equal`]
//! - **Deduplication**: [`deduplicate`] and the compatibility
//!   [`deduplicate_legacy`]
//!
//! Element types are restricted to the kinds implementing [`SliceElement`]:
//! signed integers, `f32`, and string-like values.
//!
//! ## Degradation policy
//!
//! Nothing in this crate returns an error or panics on bad input. An empty
//! sequence, an index the operation does not accept, or a degenerate range
//! leaves the sequence unchanged or yields an empty result.
//!
//! Mutating helpers take the sequence by value and return it. Always continue
//! with the returned value.
//!
//! ## Feature Flags
//!
//! - `fxhash`: use `FxHash` for deduplication
//! - `ahash`: use `aHash` for deduplication
//!
//! ## Example
//!
//! ```rust
//! use slc::prelude::*;
//!
//! let sequence = range(1, 9, 2);
//! assert_eq!(sequence, vec![1, 3, 5, 7, 9]);
//!
//! let sequence = remove_at(sequence, 1);
//! let sequence = reverse_in_place(sequence);
//! assert_eq!(sequence, vec![9, 7, 5, 1]);
//!
//! assert_eq!(deduplicate(vec![1, 2, 2, 3, 1]), vec![1, 2, 3]);
//! assert!(!structurally_equal(&[1, 2, 3], &["1", "2", "3"]));
//! ```
//!
//! [`remove_last`]: remove::remove_last
//! [`remove_first`]: remove::remove_first
//! [`remove_at`]: remove::remove_at
//! [`range`]: range::range
//! [`StepRange`]: range::StepRange
//! [`reverse_in_place`]: reverse::reverse_in_place
//! [`equal`]: equal::equal
//! [`structurally_equal`]: equal::structurally_equal
//! [`deduplicate`]: dedup::deduplicate
//! [`deduplicate_legacy`]: dedup::deduplicate_legacy
//! [`SliceElement`]: element::SliceElement

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every helper and element type.
///
/// # Usage
///
/// ```rust
/// use slc::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dedup::*;
    pub use crate::element::*;
    pub use crate::equal::*;
    pub use crate::range::*;
    pub use crate::remove::*;
    pub use crate::reverse::*;
}

pub mod dedup;
pub mod element;
pub mod equal;
pub mod range;
pub mod remove;
pub mod reverse;
