//! Index ranges into a guarded buffer's backing storage.

use std::ops::Range;

/// A contiguous `(offset, len)` range into a backing allocation.
///
/// Spans are plain indices; they never own or borrow storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start position in the backing buffer.
    pub offset: usize,
    /// Number of elements covered.
    pub len: usize,
}

impl Span {
    /// Create a span.
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// One past the last covered position.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    /// The span as a `Range<usize>`, for slicing.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    /// Returns `true` if the span covers no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `pos` lies inside the span.
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.offset && pos < self.end()
    }
}
