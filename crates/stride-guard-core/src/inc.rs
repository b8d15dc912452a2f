//! The signed [`Increment`] type and strided footprint arithmetic.

use std::fmt;
use std::num::NonZeroIsize;

use crate::error::HarnessError;

/// A non-zero stride between consecutive logical elements.
///
/// Negative increments mean reverse traversal. Layout only ever uses the
/// magnitude; the sign is kept so it can be passed on to code under test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Increment(NonZeroIsize);

impl Increment {
    /// Validate a raw increment.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::ZeroIncrement`] if `inc == 0`.
    pub fn new(inc: isize) -> Result<Self, HarnessError> {
        NonZeroIsize::new(inc)
            .map(Self)
            .ok_or(HarnessError::ZeroIncrement)
    }

    /// The signed increment.
    pub fn get(self) -> isize {
        self.0.get()
    }

    /// The increment magnitude used for layout. Always `>= 1`.
    pub fn magnitude(self) -> usize {
        self.0.get().unsigned_abs()
    }

    /// Returns `true` for negative (reverse traversal) increments.
    pub fn is_reverse(self) -> bool {
        self.0.get() < 0
    }

    /// Number of backing elements spanned by `n` values at this increment.
    ///
    /// `(n - 1) * |inc| + 1`, or `0` when `n == 0`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::FootprintOverflow`] if the result does not
    /// fit in `usize`.
    pub fn footprint(self, n: usize) -> Result<usize, HarnessError> {
        if n == 0 {
            return Ok(0);
        }
        (n - 1)
            .checked_mul(self.magnitude())
            .and_then(|v| v.checked_add(1))
            .ok_or(HarnessError::FootprintOverflow {
                len: n,
                inc: self.get(),
            })
    }

    /// Backing offset of logical element `i` (`i * |inc|`).
    ///
    /// Panics on overflow; callers index within an already validated
    /// footprint.
    #[inline]
    pub fn offset(self, i: usize) -> usize {
        i * self.magnitude()
    }

    /// Backing offset visited at step `i` of an `n`-element traversal.
    ///
    /// Forward increments visit `i * |inc|`. Reverse increments start at
    /// the far end of the footprint and visit `(n - 1 - i) * |inc|`.
    ///
    /// Panics if `i >= n`.
    #[inline]
    pub fn traversal_offset(self, i: usize, n: usize) -> usize {
        assert!(i < n, "traversal step {i} out of range for {n} elements");
        if self.is_reverse() {
            self.offset(n - 1 - i)
        } else {
            self.offset(i)
        }
    }
}

impl TryFrom<isize> for Increment {
    type Error = HarnessError;

    fn try_from(inc: isize) -> Result<Self, Self::Error> {
        Self::new(inc)
    }
}

impl From<Increment> for isize {
    fn from(inc: Increment) -> Self {
        inc.get()
    }
}

impl fmt::Display for Increment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
