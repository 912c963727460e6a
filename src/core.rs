//! Core types for Runsort.
//!
//! This module defines:
//! - [`Element`] and [`Tag`]: the tagged primitive values accepted by [`crate::sort`].
//! - [`NaturalOrder`]: the ordering capability the generic engine is parameterized over.

use std::fmt;

/// Minimum run length. Natural runs shorter than this are force-extended
/// and insertion sorted.
pub const MIN_RUN: usize = 32;

/// Input length at or above which runs are merged by the parallel tournament
/// instead of the sequential fold.
pub const PARALLEL_THRESHOLD: usize = 10_000;

/// The kind of value an [`Element`] holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Text,
    Integer,
    Float,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tag::Text => "text",
            Tag::Integer => "integer",
            Tag::Float => "float",
        };
        f.write_str(name)
    }
}

/// A single primitive value.
///
/// A sequence passed to [`crate::sort`] is expected to be homogeneous: every
/// element carries the same [`Tag`].
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl Element {
    /// Returns the tag of this value.
    pub fn tag(&self) -> Tag {
        match self {
            Element::Text(_) => Tag::Text,
            Element::Integer(_) => Tag::Integer,
            Element::Float(_) => Tag::Float,
        }
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Element::Text(value)
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Element::Text(value.to_owned())
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Integer(value)
    }
}

impl From<i32> for Element {
    fn from(value: i32) -> Self {
        Element::Integer(value.into())
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Element::Float(value)
    }
}

/// A strict total order used by the sorting engine.
///
/// `less` must behave like `<` on a total order: irreflexive, transitive,
/// and for any `a`, `b` at most one of `a.less(b)` and `b.less(a)` holds.
///
/// # Examples
///
/// ```
/// use runsort::core::NaturalOrder;
///
/// #[derive(Clone)]
/// struct Version(u32, u32);
///
/// impl NaturalOrder for Version {
///     fn less(&self, other: &Self) -> bool {
///         (self.0, self.1) < (other.0, other.1)
///     }
/// }
///
/// let sorted = runsort::sort_values(&[Version(1, 2), Version(0, 9)]).unwrap();
/// assert_eq!(sorted[0].0, 0);
/// ```
pub trait NaturalOrder {
    /// Returns `true` if `self` orders strictly before `other`.
    fn less(&self, other: &Self) -> bool;
}

// Lexicographic by bytes, which for UTF-8 matches code point order.
impl NaturalOrder for String {
    #[inline(always)]
    fn less(&self, other: &Self) -> bool {
        self.as_bytes() < other.as_bytes()
    }
}

impl NaturalOrder for i64 {
    #[inline(always)]
    fn less(&self, other: &Self) -> bool {
        self < other
    }
}

// IEEE 754 totalOrder: -0.0 before 0.0, NaN after +inf.
impl NaturalOrder for f64 {
    #[inline(always)]
    fn less(&self, other: &Self) -> bool {
        self.total_cmp(other).is_lt()
    }
}
