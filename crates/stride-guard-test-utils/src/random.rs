//! Seeded dense input generation.
//!
//! [`SliceRng`] is an explicit random context: tests create one from a
//! seed and pass it to [`random_slice`], so the same seed reproduces the
//! same inputs and parallel tests never share generator state.

use rand::distr::uniform::SampleUniform;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stride_guard_core::{HarnessError, Increment, Sentinel};

/// Configuration for a [`SliceRng`].
#[derive(Clone, Debug, PartialEq)]
pub struct RandomConfig {
    /// Seed for the ChaCha8 generator.
    pub seed: u64,
    /// Inclusive lower bound of generated values.
    pub low: f64,
    /// Exclusive upper bound of generated values.
    pub high: f64,
}

impl RandomConfig {
    /// Default seed.
    pub const DEFAULT_SEED: u64 = 0x5eed;

    /// Default lower bound.
    pub const DEFAULT_LOW: f64 = 0.0;

    /// Default upper bound.
    pub const DEFAULT_HIGH: f64 = 1.0;

    /// Create a config over `[0, 1)` with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            low: Self::DEFAULT_LOW,
            high: Self::DEFAULT_HIGH,
        }
    }

    /// Set the value range `[low, high)`.
    pub fn with_range(mut self, low: f64, high: f64) -> Self {
        self.low = low;
        self.high = high;
        self
    }

    /// Check that the range is finite and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] otherwise.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(HarnessError::InvalidConfig {
                reason: format!(
                    "random range must be finite, got [{}, {})",
                    self.low, self.high
                ),
            });
        }
        if self.low >= self.high {
            return Err(HarnessError::InvalidConfig {
                reason: format!(
                    "random range must satisfy low < high, got [{}, {})",
                    self.low, self.high
                ),
            });
        }
        Ok(())
    }
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

/// A seeded source of floating-point test values.
pub struct SliceRng {
    rng: ChaCha8Rng,
    low: f64,
    high: f64,
}

impl SliceRng {
    /// Build a generator from a validated config.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] if the range is invalid.
    pub fn new(config: &RandomConfig) -> Result<Self, HarnessError> {
        config.validate()?;
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            low: config.low,
            high: config.high,
        })
    }

    /// Generator over `[0, 1)` with the given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            low: RandomConfig::DEFAULT_LOW,
            high: RandomConfig::DEFAULT_HIGH,
        }
    }

    /// Draw one value from the configured range.
    ///
    /// If narrowing to `T` collapses the range to a single value, that
    /// value is returned.
    pub fn value<T: Sentinel + SampleUniform>(&mut self) -> T {
        let low = T::from_f64(self.low);
        let high = T::from_f64(self.high);
        if low < high {
            self.rng.random_range(low..high)
        } else {
            low
        }
    }

    /// Dense slice spanning `n` elements at `inc`. See [`random_slice`].
    pub fn slice<T: Sentinel + SampleUniform>(&mut self, n: usize, inc: isize) -> Vec<T> {
        random_slice(self, n, inc)
    }
}

impl Default for SliceRng {
    fn default() -> Self {
        Self::from_seed(RandomConfig::DEFAULT_SEED)
    }
}

/// Dense random values covering the footprint of `n` elements at `inc`.
///
/// Length is `(n - 1) * |inc| + 1`, or 0 when `n == 0`.
///
/// # Panics
///
/// Panics if `inc == 0` or the footprint overflows `usize`.
pub fn random_slice<T: Sentinel + SampleUniform>(
    rng: &mut SliceRng,
    n: usize,
    inc: isize,
) -> Vec<T> {
    let len = match Increment::new(inc).and_then(|inc| inc.footprint(n)) {
        Ok(len) => len,
        Err(e) => panic!("invalid random slice layout (n = {n}, inc = {inc}): {e}"),
    };
    (0..len).map(|_| rng.value()).collect()
}
