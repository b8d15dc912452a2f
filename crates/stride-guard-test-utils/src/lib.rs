//! Test utilities for guarded strided kernel testing.
//!
//! Provides the predicates, assertion helpers, and fixture generators
//! used to drive BLAS-like kernels against [`GuardedVec`] buffers:
//!
//! - [`check`]: pure predicates ([`all_nan`], [`non_strided_write`],
//!   [`equal_strided`]) and their `first_*` position-reporting forms.
//! - [`assert`]: panicking wrappers that name the offending position.
//! - [`incs`]: alignment tables and increment cross-products.
//! - [`random`]: seeded dense input generation ([`SliceRng`]).
//! - [`case`]: [`GuardedCase`], which runs a kernel and inspects the result.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod assert;
pub mod case;
pub mod check;
pub mod incs;
pub mod random;

pub use case::{CaseReport, GuardedCase, Mismatch};
pub use check::{all_nan, equal_strided, non_strided_write};
pub use incs::{gen_inc, gen_inc_to, Align2, Align3, IncSet, IncToSet, ALIGN2, ALIGN3};
pub use random::{random_slice, RandomConfig, SliceRng};
pub use stride_guard_arena::GuardedVec;
