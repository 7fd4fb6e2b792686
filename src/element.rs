//! Element kinds accepted by the sequence utilities.
//!
//! Every helper in this crate is generic over [`SliceElement`], a sealed trait
//! implemented for a fixed set of primitive kinds:
//!
//! | Kind                   | Rust types                       |
//! |------------------------|----------------------------------|
//! | [`ElementKind::Int8`]  | `i8`                             |
//! | [`ElementKind::Int16`] | `i16`                            |
//! | [`ElementKind::Int32`] | `i32`                            |
//! | [`ElementKind::Int64`] | `i64`                            |
//! | [`ElementKind::Int`]   | `isize`                          |
//! | [`ElementKind::Float32`] | `f32`                          |
//! | [`ElementKind::String`] | `String`, `&str`, `Box<str>`    |
//!
//! # Examples
//!
//! ```rust
//! use slc::element::{ElementKind, ElementValue, SliceElement};
//!
//! assert_eq!(7_i16.kind(), ElementKind::Int16);
//! assert_eq!("seven".value(), ElementValue::String("seven"));
//! assert_eq!(f32::NAN.dedup_key(), None);
//! ```

use std::fmt::Debug;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for isize {}
    impl Sealed for f32 {}
    impl Sealed for String {}
    impl Sealed for &str {}
    impl Sealed for Box<str> {}
}

/// The kind of a sequence element.
///
/// Two sequences can only be structurally equal when their kinds match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 8-bit signed integer.
    Int8,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// Pointer-width signed integer.
    Int,
    /// 32-bit floating point.
    Float32,
    /// Any string-like value.
    String,
}

/// A borrowed, kind-tagged view of a single element.
///
/// Values of different kinds never compare equal, even when they would
/// print the same (`1` and `"1"`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementValue<'a> {
    /// An `i8` value.
    Int8(i8),
    /// An `i16` value.
    Int16(i16),
    /// An `i32` value.
    Int32(i32),
    /// An `i64` value.
    Int64(i64),
    /// An `isize` value.
    Int(isize),
    /// An `f32` value. Follows IEEE equality, so `NaN != NaN`.
    Float32(f32),
    /// A string-like value.
    String(&'a str),
}

/// An element type the sequence utilities operate on.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait SliceElement: sealed::Sealed + Clone + PartialEq + Debug {
    /// The key used to detect repeated values during deduplication.
    type Key: Hash + Eq;

    /// The kind shared by every value of this type.
    const KIND: ElementKind;

    /// Returns the kind of this element.
    #[inline]
    fn kind(&self) -> ElementKind {
        Self::KIND
    }

    /// Returns a kind-tagged view of this element.
    fn value(&self) -> ElementValue<'_>;

    /// Returns the deduplication key, or `None` if the value never equals
    /// anything (including itself) and so can never be a repeat.
    fn dedup_key(&self) -> Option<Self::Key>;
}

macro_rules! impl_slice_element_for_integer {
    ($($integer:ty => $variant:ident),* $(,)?) => {
        $(
            impl SliceElement for $integer {
                type Key = Self;

                const KIND: ElementKind = ElementKind::$variant;

                #[inline]
                fn value(&self) -> ElementValue<'_> {
                    ElementValue::$variant(*self)
                }

                #[inline]
                fn dedup_key(&self) -> Option<Self::Key> {
                    Some(*self)
                }
            }
        )*
    };
}

impl_slice_element_for_integer!(
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    isize => Int,
);

impl SliceElement for f32 {
    type Key = u32;

    const KIND: ElementKind = ElementKind::Float32;

    #[inline]
    fn value(&self) -> ElementValue<'_> {
        ElementValue::Float32(*self)
    }

    fn dedup_key(&self) -> Option<Self::Key> {
        if self.is_nan() {
            None
        } else if *self == 0.0 {
            // -0.0 == 0.0
            Some(0.0_f32.to_bits())
        } else {
            Some(self.to_bits())
        }
    }
}

impl SliceElement for String {
    type Key = Self;

    const KIND: ElementKind = ElementKind::String;

    #[inline]
    fn value(&self) -> ElementValue<'_> {
        ElementValue::String(self)
    }

    #[inline]
    fn dedup_key(&self) -> Option<Self::Key> {
        Some(self.clone())
    }
}

impl<'a> SliceElement for &'a str {
    type Key = &'a str;

    const KIND: ElementKind = ElementKind::String;

    #[inline]
    fn value(&self) -> ElementValue<'_> {
        ElementValue::String(self)
    }

    #[inline]
    fn dedup_key(&self) -> Option<Self::Key> {
        Some(*self)
    }
}

impl SliceElement for Box<str> {
    type Key = Self;

    const KIND: ElementKind = ElementKind::String;

    #[inline]
    fn value(&self) -> ElementValue<'_> {
        ElementValue::String(self)
    }

    #[inline]
    fn dedup_key(&self) -> Option<Self::Key> {
        Some(self.clone())
    }
}
