//! Single guarded kernel invocation with post-run inspection.
//!
//! [`GuardedCase`] lays a dense input out in a fresh [`GuardedVec`],
//! hands the vector view to a kernel, and re-inspects all three views:
//!
//! ```ignore
//! let report = GuardedCase::new("scal n=4 inc=-2", &x, -2)
//!     .run_expect(&want, |n, v, inc| scal(n, 2.0, v, inc));
//! report.assert_clean();
//! ```

use std::fmt;

use stride_guard_arena::{GuardConfig, GuardedVec, Span};
use stride_guard_core::{same, HarnessError, Increment, Sentinel};

use crate::assert::{describe_position, format_value};
use crate::check::{first_non_nan, first_nonstrided_write};

/// The first logical index whose strided value differs from the expectation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mismatch<T> {
    /// Logical index into the dense expectation.
    pub index: usize,
    /// The expected value.
    pub expected: T,
    /// The value found at `index * |inc|`.
    pub actual: T,
}

/// One kernel invocation against a guarded buffer.
#[derive(Clone, Debug)]
pub struct GuardedCase<T> {
    label: String,
    data: Vec<T>,
    inc: Increment,
    config: GuardConfig,
}

impl<T: Sentinel> GuardedCase<T> {
    /// Create a case with the default guard layout.
    ///
    /// # Panics
    ///
    /// Panics if `inc == 0`.
    pub fn new(label: impl Into<String>, data: &[T], inc: isize) -> Self {
        let label = label.into();
        let inc = match Increment::new(inc) {
            Ok(inc) => inc,
            Err(e) => panic!("{label}: {e}"),
        };
        Self {
            label,
            data: data.to_vec(),
            inc,
            config: GuardConfig::default(),
        }
    }

    /// Override the guard layout.
    pub fn with_config(mut self, config: GuardConfig) -> Self {
        self.config = config;
        self
    }

    /// The case label used in failure messages.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Build a fresh guarded buffer for this case.
    ///
    /// # Errors
    ///
    /// Propagates layout errors from [`GuardedVec::with_config`].
    pub fn build(&self) -> Result<GuardedVec<T>, HarnessError> {
        GuardedVec::with_config(&self.data, self.inc, &self.config)
    }

    /// Run `kernel(n, vector, inc)` and inspect guards and gaps.
    ///
    /// # Panics
    ///
    /// Panics if the buffer cannot be laid out with the case's config.
    pub fn run<F>(&self, kernel: F) -> CaseReport<T>
    where
        F: FnOnce(usize, &mut [T], isize),
    {
        self.run_whole(|n, whole, vector, inc| kernel(n, &mut whole[vector.range()], inc))
    }

    /// Run `kernel(n, whole, vector_span, inc)` over the whole backing
    /// buffer.
    ///
    /// For kernels addressed by offset into a larger allocation, where an
    /// out-of-footprint access stays inside the slice and must show up as
    /// guard corruption rather than a bounds panic.
    ///
    /// # Panics
    ///
    /// Panics if the buffer cannot be laid out with the case's config.
    pub fn run_whole<F>(&self, kernel: F) -> CaseReport<T>
    where
        F: FnOnce(usize, &mut [T], Span, isize),
    {
        let mut buffer = match self.build() {
            Ok(b) => b,
            Err(e) => panic!("{}: {e}", self.label),
        };
        let n = buffer.len();
        let span = buffer.vector_span();
        kernel(n, buffer.whole_mut(), span, self.inc.get());

        CaseReport {
            label: self.label.clone(),
            front_corrupt: first_non_nan(buffer.front_guard()),
            back_corrupt: first_non_nan(buffer.back_guard()),
            gap_write: first_nonstrided_write(buffer.vector(), self.inc.get()),
            mismatch: None,
            buffer,
        }
    }

    /// Like [`run`](Self::run), and also compare the strided result
    /// against the dense `expected`.
    pub fn run_expect<F>(&self, expected: &[T], kernel: F) -> CaseReport<T>
    where
        F: FnOnce(usize, &mut [T], isize),
    {
        let mut report = self.run(kernel);
        let v = report.buffer.vector();
        let m = self.inc.magnitude();
        let mismatch = expected
            .iter()
            .enumerate()
            .find_map(|(i, &e)| match v.get(i * m) {
                Some(&actual) if same(actual, e) => None,
                found => Some(Mismatch {
                    index: i,
                    expected: e,
                    actual: found.copied().unwrap_or(T::SENTINEL),
                }),
            });
        report.mismatch = mismatch;
        report
    }
}

/// What a [`GuardedCase`] found after the kernel returned.
#[derive(Clone, Debug)]
pub struct CaseReport<T> {
    /// The case label.
    pub label: String,
    /// First written position in the front guard, if any.
    pub front_corrupt: Option<usize>,
    /// First written position in the back guard, if any.
    pub back_corrupt: Option<usize>,
    /// First written off-stride position in the vector view, if any.
    pub gap_write: Option<usize>,
    /// First mismatch against the expectation, if one was given.
    pub mismatch: Option<Mismatch<T>>,
    /// The buffer after the kernel ran.
    pub buffer: GuardedVec<T>,
}

impl<T: Sentinel> CaseReport<T> {
    /// Returns `true` if no violation was found.
    pub fn is_clean(&self) -> bool {
        self.front_corrupt.is_none()
            && self.back_corrupt.is_none()
            && self.gap_write.is_none()
            && self.mismatch.is_none()
    }

    /// Panic with a description of every violation found.
    pub fn assert_clean(&self) {
        if !self.is_clean() {
            panic!("{self}");
        }
    }
}

impl<T: Sentinel> fmt::Display for CaseReport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return write!(f, "{}: clean", self.label);
        }
        write!(f, "{}:", self.label)?;
        let g = &self.buffer;
        if let Some(pos) = self.front_corrupt {
            let at = g.front_span().offset + pos;
            write!(f, " front guard written at {pos} (backing {at});")?;
        }
        if let Some(pos) = self.back_corrupt {
            let at = g.back_span().offset + pos;
            write!(f, " back guard written at {pos} (backing {at});")?;
        }
        if let Some(pos) = self.gap_write {
            let at = g.vector_span().offset + pos;
            write!(
                f,
                " non-strided write at {pos} (backing {at}, value {});",
                format_value(g.whole()[at])
            )?;
        }
        if let Some(m) = &self.mismatch {
            let at = g.vector_span().offset + m.index * g.inc().magnitude();
            write!(
                f,
                " mismatch at index {} ({}): expected {}, got {};",
                m.index,
                describe_position(g, at),
                format_value(m.expected),
                format_value(m.actual)
            )?;
        }
        Ok(())
    }
}
