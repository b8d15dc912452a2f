//! Panicking assertion helpers for guarded kernel tests.
//!
//! Each helper wraps a predicate from [`crate::check`] and, on failure,
//! panics with the case label and the first offending position.

use stride_guard_arena::{GuardedVec, Region};
use stride_guard_core::Sentinel;

use crate::check::{first_mismatch, first_non_nan, first_nonstrided_write};

/// Assert that every element of `x` is NaN.
pub fn assert_all_nan<T: Sentinel>(x: &[T], case: &str) {
    if let Some(pos) = first_non_nan(x) {
        panic!(
            "{case}: expected all NaN, found {:?} at position {pos}",
            x[pos]
        );
    }
}

/// Assert that neither guard of `g` has been written.
pub fn assert_guards_intact<T: Sentinel>(g: &GuardedVec<T>, case: &str) {
    let sides = [
        ("front", g.front_span().offset, g.front_guard()),
        ("back", g.back_span().offset, g.back_guard()),
    ];
    for (side, base, guard) in sides {
        if let Some(pos) = first_non_nan(guard) {
            panic!(
                "{case}: {side} guard modified at {pos} of {} (backing {}: {}, value {}, inc {})",
                g.guard_len(),
                base + pos,
                describe_position(g, base + pos),
                format_value(guard[pos]),
                g.inc()
            );
        }
    }
}

/// Assert that no off-stride element of `x` has been written.
pub fn assert_no_nonstrided_write<T: Sentinel>(x: &[T], inc: isize, case: &str) {
    if let Some(pos) = first_nonstrided_write(x, inc) {
        panic!(
            "{case}: non-strided write at position {pos} (value {:?}, inc {inc})",
            x[pos]
        );
    }
}

/// Assert that `x[i * |inc|]` matches `reference[i]` for every `i`.
pub fn assert_equal_strided<T: Sentinel>(reference: &[T], x: &[T], inc: isize, case: &str) {
    if let Some(i) = first_mismatch(reference, x, inc) {
        let pos = i * inc.unsigned_abs();
        match x.get(pos) {
            Some(&actual) => panic!(
                "{case}: mismatch at index {i} (offset {pos}): expected {}, got {}",
                format_value(reference[i]),
                format_value(actual)
            ),
            None => panic!(
                "{case}: strided buffer of length {} too short for index {i} (offset {pos})",
                x.len()
            ),
        }
    }
}

/// Assert the full post-kernel contract on `g`: guards intact, no gap
/// writes, and the strided contents equal to `expected`.
pub fn assert_guarded_result<T: Sentinel>(g: &GuardedVec<T>, expected: &[T], case: &str) {
    assert_guards_intact(g, case);
    let inc = g.inc().get();
    assert_no_nonstrided_write(g.vector(), inc, case);
    assert_equal_strided(expected, g.vector(), inc, case);
}

/// Format a value for failure messages.
///
/// NaNs are printed with their raw bits so that a sentinel left in place
/// can be told apart from a NaN the kernel produced.
pub fn format_value<T: Sentinel>(v: T) -> String {
    if v.is_sentinel() {
        format!("NaN (bits {:#x})", v.to_bits_u64())
    } else {
        format!("{v:?}")
    }
}

/// Describe where a backing position falls, for failure messages.
pub fn describe_position<T>(g: &GuardedVec<T>, pos: usize) -> String {
    match g.locate(pos) {
        Some(Region::FrontGuard(i)) => format!("front guard [{i}]"),
        Some(Region::Vector(i)) => format!("vector [{i}]"),
        Some(Region::BackGuard(i)) => format!("back guard [{i}]"),
        None => format!("out of buffer [{pos}]"),
    }
}
