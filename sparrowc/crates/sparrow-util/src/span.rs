//! Span module - Source location tracking.
//!
//! A [`Span`] is a half-open range of Unicode scalar indices into one source
//! buffer. Scalar indices are the only position data the toolchain keeps;
//! there is no line/column bookkeeping.
//!
//! # Examples
//!
//! ```
//! use sparrow_util::span::Span;
//!
//! let span = Span::new(4, 9);
//! assert_eq!(span.len(), 5);
//! assert!(span.contains(4));
//! assert!(!span.contains(9));
//! ```

use std::fmt;

/// Source location span
///
/// `start` is inclusive and `end` is exclusive, both counted in scalars
/// (Rust `char`s) from the start of the buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// Index of the first scalar covered by the span
    pub start: usize,
    /// Index one past the last scalar covered by the span
    pub end: usize,
}

impl Span {
    /// Dummy span for testing
    ///
    /// ```
    /// use sparrow_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span.
    ///
    /// # Panics
    ///
    /// Debug builds assert that `start <= end`.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Create an empty span at a single position.
    #[inline]
    pub const fn point(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Number of scalars covered.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no scalars.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `index` lies inside the span.
    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Smallest span covering both `self` and `other`.
    ///
    /// ```
    /// use sparrow_util::span::Span;
    ///
    /// assert_eq!(Span::new(2, 4).to(Span::new(7, 8)), Span::new(2, 8));
    /// ```
    pub fn to(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
