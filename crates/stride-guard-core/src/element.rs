//! Floating-point element types that can carry a NaN sentinel.

use std::fmt;

/// An element type with a NaN sentinel used to mark untouched memory.
///
/// Implemented for `f32` and `f64`. The sentinel is never used for
/// arithmetic; it only marks positions that code under test must not
/// have written.
pub trait Sentinel: Copy + PartialEq + PartialOrd + fmt::Debug + fmt::Display + 'static {
    /// The sentinel value (a quiet NaN).
    const SENTINEL: Self;

    /// Returns `true` if `self` is any NaN, regardless of payload.
    fn is_sentinel(self) -> bool;

    /// Convert from `f64`, rounding to nearest for narrower types.
    fn from_f64(v: f64) -> Self;

    /// Raw bit pattern widened to `u64`, for diagnostics.
    fn to_bits_u64(self) -> u64;
}

macro_rules! impl_sentinel {
    ($t:ty) => {
        impl Sentinel for $t {
            const SENTINEL: Self = <$t>::NAN;

            #[inline]
            fn is_sentinel(self) -> bool {
                self.is_nan()
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }

            #[inline]
            fn to_bits_u64(self) -> u64 {
                self.to_bits() as u64
            }
        }
    };
}

impl_sentinel!(f32);
impl_sentinel!(f64);

/// NaN-aware equality.
///
/// Two NaNs compare equal to each other whatever their payload or sign
/// bit. All other values compare with ordinary `==`, so `0.0` and `-0.0`
/// are the same.
#[inline]
pub fn same<T: Sentinel>(a: T, b: T) -> bool {
    a == b || (a.is_sentinel() && b.is_sentinel())
}
