//! Sentinel, corruption, and strided equality predicates.
//!
//! All predicates are pure and operate on any slice: a vector view, a
//! guard, or a whole backing buffer. Increments are signed; only the
//! magnitude matters here.

use stride_guard_core::{same, Sentinel};

fn magnitude(inc: isize) -> usize {
    assert!(inc != 0, "increment must be non-zero");
    inc.unsigned_abs()
}

/// Position of the first element of `x` that is not NaN.
pub fn first_non_nan<T: Sentinel>(x: &[T]) -> Option<usize> {
    x.iter().position(|v| !v.is_sentinel())
}

/// Returns `true` if every element of `x` is NaN.
///
/// An empty slice is trivially all NaN.
pub fn all_nan<T: Sentinel>(x: &[T]) -> bool {
    first_non_nan(x).is_none()
}

/// Position of the first off-stride element of `x` that is not NaN.
///
/// # Panics
///
/// Panics if `inc == 0`.
pub fn first_nonstrided_write<T: Sentinel>(x: &[T], inc: isize) -> Option<usize> {
    let m = magnitude(inc);
    x.iter()
        .enumerate()
        .position(|(i, v)| i % m != 0 && !v.is_sentinel())
}

/// Returns `true` if some element of `x` off a stride boundary is not NaN.
///
/// A clean buffer (only stride positions written) returns `false`.
///
/// # Panics
///
/// Panics if `inc == 0`.
pub fn non_strided_write<T: Sentinel>(x: &[T], inc: isize) -> bool {
    first_nonstrided_write(x, inc).is_some()
}

/// Logical index of the first element where `x[i * |inc|]` differs from
/// `reference[i]` under [`same`].
///
/// If `x` is too short to hold the footprint, the first index that falls
/// outside `x` is reported.
///
/// # Panics
///
/// Panics if `inc == 0`.
pub fn first_mismatch<T: Sentinel>(reference: &[T], x: &[T], inc: isize) -> Option<usize> {
    let m = magnitude(inc);
    reference
        .iter()
        .enumerate()
        .position(|(i, &r)| match x.get(i * m) {
            Some(&v) => !same(v, r),
            None => true,
        })
}

/// Returns `true` if the strided vector `x` holds `reference[i]` at every
/// `i * |inc|`.
///
/// NaN in `reference` matches any NaN in `x`.
///
/// # Panics
///
/// Panics if `inc == 0`.
pub fn equal_strided<T: Sentinel>(reference: &[T], x: &[T], inc: isize) -> bool {
    first_mismatch(reference, x, inc).is_none()
}
