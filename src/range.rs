//! Stepped integer ranges.
//!
//! [`range`] materializes an inclusive, ascending run of integers into a
//! `Vec`. [`StepRange`] is the lazy iterator behind it.
//!
//! Degenerate parameters never fail: a non-positive step or a `stop` below
//! `start` yields an empty range.
//!
//! # Examples
//!
//! ```rust
//! use slc::range::{StepRange, range};
//!
//! assert_eq!(range(0, 10, 2), vec![0, 2, 4, 6, 8, 10]);
//! assert_eq!(range(0, 9, 4), vec![0, 4, 8]);
//! assert!(range(5, 1, 1).is_empty());
//!
//! let descending: Vec<i64> = StepRange::new(1, 7, 3).rev().collect();
//! assert_eq!(descending, vec![7, 4, 1]);
//! ```

use std::iter::FusedIterator;

/// Returns `start, start + step, ...` up to and including `stop`.
///
/// The last value is `stop` itself when it is reached exactly, otherwise the
/// largest value below it. Returns an empty `Vec` when `step <= 0` or
/// `stop < start`. The result is allocated once with room for exactly
/// `1 + (stop - start) / step` values.
///
/// # Examples
///
/// ```rust
/// use slc::range::range;
///
/// assert_eq!(range(1, 5, 1), vec![1, 2, 3, 4, 5]);
/// assert_eq!(range(-3, 3, 3), vec![-3, 0, 3]);
/// assert!(range(0, 10, 0).is_empty());
/// ```
#[must_use]
pub fn range(start: i64, stop: i64, step: i64) -> Vec<i64> {
    let values = StepRange::new(start, stop, step);
    let mut sequence = Vec::with_capacity(values.len());
    sequence.extend(values);
    sequence
}

/// A lazy, inclusive, ascending stepped range over `i64`.
///
/// The range never overflows: its last value is computed up front and is
/// always within `start..=stop`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRange {
    front: i64,
    back: i64,
    step: i64,
    exhausted: bool,
}

impl StepRange {
    /// Creates a range from `start` to `stop` inclusive, advancing by `step`.
    ///
    /// The range is empty when `step <= 0` or `stop < start`.
    #[must_use]
    pub fn new(start: i64, stop: i64, step: i64) -> Self {
        if step <= 0 || stop < start {
            return Self::empty();
        }
        let stride = step.unsigned_abs();
        let offset = (stop.abs_diff(start) / stride) * stride;
        match start.checked_add_unsigned(offset) {
            Some(back) => Self {
                front: start,
                back,
                step,
                exhausted: false,
            },
            None => Self::empty(),
        }
    }

    /// Creates a range that yields nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            front: 0,
            back: 0,
            step: 1,
            exhausted: true,
        }
    }

    fn remaining(&self) -> usize {
        if self.exhausted {
            return 0;
        }
        let steps = self.back.abs_diff(self.front) / self.step.unsigned_abs();
        steps
            .checked_add(1)
            .and_then(|count| usize::try_from(count).ok())
            .unwrap_or(usize::MAX)
    }
}

impl Iterator for StepRange {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let value = self.front;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            // front + step <= back
            self.front += self.step;
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for StepRange {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let value = self.back;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back -= self.step;
        }
        Some(value)
    }
}

impl ExactSizeIterator for StepRange {}

impl FusedIterator for StepRange {}

static_assertions::assert_impl_all!(StepRange: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 10, 2, vec![0, 2, 4, 6, 8, 10])]
    #[case(1, 5, 1, vec![1, 2, 3, 4, 5])]
    #[case(0, 9, 4, vec![0, 4, 8])]
    #[case(3, 3, 7, vec![3])]
    #[case(-5, -1, 2, vec![-5, -3, -1])]
    #[case(5, 1, 1, vec![])]
    #[case(0, 10, 0, vec![])]
    #[case(0, 10, -2, vec![])]
    fn test_range(
        #[case] start: i64,
        #[case] stop: i64,
        #[case] step: i64,
        #[case] expected: Vec<i64>,
    ) {
        assert_eq!(range(start, stop, step), expected);
    }

    #[rstest]
    fn test_range_is_presized() {
        let values = range(0, 100, 7);
        assert_eq!(values.len(), 1 + 100 / 7);
        assert_eq!(values.capacity(), values.len());
    }

    #[rstest]
    fn test_range_near_upper_bound_does_not_overflow() {
        let values = range(i64::MAX - 4, i64::MAX, 3);
        assert_eq!(values, vec![i64::MAX - 4, i64::MAX - 1]);
    }

    #[rstest]
    fn test_range_with_huge_step() {
        assert_eq!(
            range(i64::MIN, i64::MAX, i64::MAX),
            vec![i64::MIN, -1, i64::MAX - 1]
        );
        assert_eq!(range(0, 10, i64::MAX), vec![0]);
    }

    #[rstest]
    fn test_len_tracks_both_ends() {
        let mut values = StepRange::new(0, 20, 5);
        assert_eq!(values.len(), 5);
        assert_eq!(values.next(), Some(0));
        assert_eq!(values.next_back(), Some(20));
        assert_eq!(values.len(), 3);
        assert_eq!(values.next(), Some(5));
        assert_eq!(values.next_back(), Some(15));
        assert_eq!(values.next(), Some(10));
        assert_eq!(values.len(), 0);
        assert_eq!(values.next(), None);
        assert_eq!(values.next_back(), None);
    }

    #[rstest]
    fn test_full_span_len_saturates() {
        let values = StepRange::new(i64::MIN, i64::MAX, 1);
        assert_eq!(values.size_hint().0, usize::MAX);
    }

    #[rstest]
    fn test_empty_range() {
        let mut values = StepRange::empty();
        assert_eq!(values.len(), 0);
        assert_eq!(values.next(), None);
    }
}
