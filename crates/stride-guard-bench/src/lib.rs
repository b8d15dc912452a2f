//! Benchmark fixtures for the stride-guard harness.
//!
//! - [`fixture_incs`]: the increment candidates benchmarked
//! - [`fixture_data`]: seeded dense inputs of a given length

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use stride_guard_test_utils::SliceRng;

/// Increment candidates covering unit, small, and reverse strides.
pub fn fixture_incs() -> [isize; 6] {
    [-8, -2, -1, 1, 2, 8]
}

/// Seeded dense input of `n` values in `[0, 1)`.
pub fn fixture_data(n: usize, seed: u64) -> Vec<f64> {
    SliceRng::from_seed(seed).slice(n, 1)
}
