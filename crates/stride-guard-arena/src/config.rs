//! Guard layout configuration.

use stride_guard_core::{HarnessError, Increment};

/// Configuration for guarded buffer layout.
///
/// Immutable after validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardConfig {
    /// Guard length per side, in multiples of `|inc|`.
    ///
    /// Default: 2. Must be at least 1.
    pub guard_factor: usize,
}

impl GuardConfig {
    /// Default guard factor: each guard spans two strides.
    pub const DEFAULT_GUARD_FACTOR: usize = 2;

    /// Create a config with the given guard factor.
    pub fn new(guard_factor: usize) -> Self {
        Self { guard_factor }
    }

    /// Check that the configuration can produce a detectable layout.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] if `guard_factor` is zero.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.guard_factor == 0 {
            return Err(HarnessError::InvalidConfig {
                reason: "guard_factor must be >= 1".into(),
            });
        }
        Ok(())
    }

    /// Guard length (per side) for the given increment.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::FootprintOverflow`] if the guard length
    /// does not fit in `usize`.
    pub fn guard_len(&self, inc: Increment) -> Result<usize, HarnessError> {
        self.guard_factor
            .checked_mul(inc.magnitude())
            .ok_or(HarnessError::FootprintOverflow {
                len: self.guard_factor,
                inc: inc.get(),
            })
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_GUARD_FACTOR)
    }
}
