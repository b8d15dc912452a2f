//! stride-guard: a guarded strided vector test harness for BLAS-like kernels.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the stride-guard sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use stride_guard::prelude::*;
//!
//! // A strided scale kernel under test.
//! fn scal(n: usize, alpha: f64, x: &mut [f64], inc: isize) {
//!     let m = inc.unsigned_abs();
//!     for i in 0..n {
//!         x[i * m] *= alpha;
//!     }
//! }
//!
//! let mut rng = SliceRng::from_seed(1);
//! for set in gen_inc(&[-2, 1, 3]) {
//!     let data: Vec<f64> = rng.slice(5, 1);
//!     let want: Vec<f64> = data.iter().map(|v| v * 2.0).collect();
//!     GuardedCase::new(format!("scal inc={}", set.x), &data, set.x)
//!         .run_expect(&want, |n, x, inc| scal(n, 2.0, x, inc))
//!         .assert_clean();
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `stride-guard-core` | `Increment`, `Sentinel`, `same`, `HarnessError` |
//! | [`arena`] | `stride-guard-arena` | `GuardedVec`, `Span`, `GuardConfig` |
//! | [`test_utils`] | `stride-guard-test-utils` | Checkers, assertions, generators, `GuardedCase` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`stride-guard-core`).
pub use stride_guard_core as types;

/// Guarded buffer storage (`stride-guard-arena`).
pub use stride_guard_arena as arena;

/// Checkers, assertions, generators, and case runners
/// (`stride-guard-test-utils`).
pub use stride_guard_test_utils as test_utils;

/// Common imports for kernel test suites.
pub mod prelude {
    pub use stride_guard_arena::{GuardConfig, GuardedVec, Region, Span};
    pub use stride_guard_core::{same, HarnessError, Increment, Sentinel};
    pub use stride_guard_test_utils::assert::{
        assert_all_nan, assert_equal_strided, assert_guarded_result, assert_guards_intact,
        assert_no_nonstrided_write,
    };
    pub use stride_guard_test_utils::{
        all_nan, equal_strided, gen_inc, gen_inc_to, non_strided_write, random_slice, CaseReport,
        GuardedCase, IncSet, IncToSet, RandomConfig, SliceRng, ALIGN2, ALIGN3,
    };
}
