//! Integration test: drive small strided kernels through guarded buffers.
//!
//! Mirrors how a BLAS-like kernel suite is exercised: every increment
//! pair from `gen_inc`, every offset pair from `ALIGN2`, several lengths,
//! seeded random inputs, then guard/gap/value checks on every operand.

use stride_guard_core::Increment;
use stride_guard_test_utils::assert::{
    assert_all_nan, assert_equal_strided, assert_guarded_result, assert_guards_intact,
    assert_no_nonstrided_write,
};
use stride_guard_test_utils::{
    gen_inc, gen_inc_to, GuardedCase, GuardedVec, SliceRng, ALIGN2, ALIGN3,
};

const INCS: [isize; 6] = [-4, -2, -1, 1, 2, 3];
const LENS: [usize; 5] = [0, 1, 2, 5, 11];

// ── Test-local kernels ───────────────────────────────────────────────

/// Storage index of the i-th step for a kernel that walks `n` elements at
/// `inc`, starting from the far end for negative increments.
fn step(i: usize, n: usize, inc: isize) -> usize {
    Increment::new(inc).unwrap().traversal_offset(i, n)
}

/// `y[iy] += alpha * x[ix]` over `n` strided steps.
fn axpy_inc(alpha: f64, x: &[f64], incx: isize, y: &mut [f64], incy: isize, n: usize) {
    for i in 0..n {
        y[step(i, n, incy)] += alpha * x[step(i, n, incx)];
    }
}

/// `dst[id] = alpha * x[ix] + y[iy]` over `n` strided steps.
#[allow(clippy::too_many_arguments)]
fn axpy_inc_to(
    dst: &mut [f64],
    incdst: isize,
    alpha: f64,
    x: &[f64],
    incx: isize,
    y: &[f64],
    incy: isize,
    n: usize,
) {
    for i in 0..n {
        dst[step(i, n, incdst)] = alpha * x[step(i, n, incx)] + y[step(i, n, incy)];
    }
}

/// `x[ix] *= alpha` over `n` strided steps.
fn scal_inc(alpha: f32, x: &mut [f32], inc: isize, n: usize) {
    for i in 0..n {
        x[step(i, n, inc)] *= alpha;
    }
}

/// Logical-order reference for a kernel walking `n` elements at `inc`.
fn logical(i: usize, n: usize, inc: isize) -> usize {
    if Increment::new(inc).unwrap().is_reverse() {
        n - 1 - i
    } else {
        i
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[test]
fn axpy_over_all_increment_pairs_and_alignments() {
    let mut rng = SliceRng::from_seed(2015);
    let alpha = 0.75;

    for set in gen_inc(&INCS) {
        for align in ALIGN2 {
            // n = 0 is covered by zero_length_leaves_buffer_all_nan.
            for n in LENS.into_iter().filter(|&n| n > 0) {
                let case = format!("axpy inc={set:?} align={align:?} n={n}");
                // Leading `align` elements are present but skipped by the kernel.
                let xd: Vec<f64> = rng.slice(n + align.x, 1);
                let yd: Vec<f64> = rng.slice(n + align.y, 1);

                let x = GuardedVec::new(&xd, set.x);
                let mut y = GuardedVec::new(&yd, set.y);

                let mut want = yd.clone();
                for i in 0..n {
                    let ky = align.y + logical(i, n, set.y);
                    let kx = align.x + logical(i, n, set.x);
                    want[ky] += alpha * xd[kx];
                }

                let xo = align.x * set.x.unsigned_abs();
                let yo = align.y * set.y.unsigned_abs();
                axpy_inc(
                    alpha,
                    &x.vector()[xo..],
                    set.x,
                    &mut y.vector_mut()[yo..],
                    set.y,
                    n,
                );

                assert_guarded_result(&x, &xd, &format!("{case} (x)"));
                assert_guarded_result(&y, &want, &format!("{case} (y)"));
            }
        }
    }
}

#[test]
fn axpy_to_over_all_increment_triples() {
    let mut rng = SliceRng::from_seed(7);
    let alpha = -2.0;
    let incs = [-3, 1, 2];

    for set in gen_inc_to(&incs) {
        for align in ALIGN3 {
            for n in [1usize, 4, 9] {
                let case = format!("axpy_to inc={set:?} align={align:?} n={n}");
                let dd = vec![f64::NAN; n + align.x];
                let xd: Vec<f64> = rng.slice(n + align.y, 1);
                let yd: Vec<f64> = rng.slice(n + align.z, 1);

                let mut dst = GuardedVec::new(&dd, set.dst);
                let x = GuardedVec::new(&xd, set.x);
                let y = GuardedVec::new(&yd, set.y);

                let mut want = dd.clone();
                for i in 0..n {
                    want[align.x + logical(i, n, set.dst)] = alpha
                        * xd[align.y + logical(i, n, set.x)]
                        + yd[align.z + logical(i, n, set.y)];
                }

                let d_off = align.x * set.dst.unsigned_abs();
                let x_off = align.y * set.x.unsigned_abs();
                let y_off = align.z * set.y.unsigned_abs();
                axpy_inc_to(
                    &mut dst.vector_mut()[d_off..],
                    set.dst,
                    alpha,
                    &x.vector()[x_off..],
                    set.x,
                    &y.vector()[y_off..],
                    set.y,
                    n,
                );

                assert_guarded_result(&dst, &want, &format!("{case} (dst)"));
                assert_guarded_result(&x, &xd, &format!("{case} (x)"));
                assert_guarded_result(&y, &yd, &format!("{case} (y)"));
            }
        }
    }
}

#[test]
fn scal_f32_via_guarded_case() {
    let mut rng = SliceRng::from_seed(99);
    for inc in INCS {
        for n in LENS {
            let data: Vec<f32> = rng.slice(n, 1);
            let want: Vec<f32> = data.iter().map(|v| v * 3.0).collect();
            GuardedCase::new(format!("scal inc={inc} n={n}"), &data, inc)
                .run_expect(&want, |n, x, inc| scal_inc(3.0, x, inc, n))
                .assert_clean();
        }
    }
}

#[test]
fn zero_length_leaves_buffer_all_nan() {
    for inc in INCS {
        let mut y = GuardedVec::<f64>::new(&[], inc);
        axpy_inc(1.0, &[], 1, y.vector_mut(), inc, 0);
        assert_all_nan(y.whole(), &format!("n=0 inc={inc}"));
    }
}

#[test]
fn nan_inputs_propagate_and_compare_equal() {
    let xd = [1.0, f64::NAN, 3.0];
    let yd = [0.0, 0.0, f64::NAN];
    let x = GuardedVec::new(&xd, 2);
    let mut y = GuardedVec::new(&yd, -3);
    axpy_inc(1.0, x.vector(), 2, y.vector_mut(), -3, 3);

    // Reverse y pairs y[2 - i] with x[i].
    let want = [3.0, f64::NAN, f64::NAN];
    assert_guards_intact(&y, "nan y");
    assert_no_nonstrided_write(y.vector(), -3, "nan y");
    assert_equal_strided(&want, y.vector(), -3, "nan y");
}
