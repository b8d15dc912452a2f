//! The guarded strided vector.
//!
//! [`GuardedVec`] owns one backing `Vec<T>` and hands out three views
//! into it: the front guard, the strided vector, and the back guard.
//! All positions start as the NaN sentinel; only the stride-boundary
//! positions of the vector view carry data.

use stride_guard_core::{HarnessError, Increment, Sentinel};

use crate::config::GuardConfig;
use crate::span::Span;

/// Which part of a guarded buffer a backing position belongs to.
///
/// The wrapped index is relative to the start of that region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    /// Inside the leading guard.
    FrontGuard(usize),
    /// Inside the strided vector view.
    Vector(usize),
    /// Inside the trailing guard.
    BackGuard(usize),
}

/// A strided vector embedded between two sentinel guard regions.
///
/// The three views are [`Span`]s into a single allocation, so the guards
/// are physically adjacent to the vector and any out-of-footprint write
/// by code under test lands in a guard.
#[derive(Clone, Debug)]
pub struct GuardedVec<T> {
    /// Backing storage: `front | vector | back`.
    data: Vec<T>,
    front: Span,
    vector: Span,
    back: Span,
    inc: Increment,
    /// Number of logical elements laid out in the vector view.
    len: usize,
}

impl<T: Sentinel> GuardedVec<T> {
    /// Lay `data` out at increment `inc` with the default guard config.
    ///
    /// Negative increments use their magnitude for layout.
    ///
    /// # Panics
    ///
    /// Panics if `inc == 0` or the layout overflows `usize`. Both can
    /// only come from a misconfigured test.
    pub fn new(data: &[T], inc: isize) -> Self {
        let built = Increment::new(inc)
            .and_then(|inc| Self::with_config(data, inc, &GuardConfig::default()));
        match built {
            Ok(v) => v,
            Err(e) => panic!("invalid guarded vector layout (inc = {inc}): {e}"),
        }
    }

    /// Lay `data` out at increment `inc` with an explicit guard config.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] if `config` fails
    /// validation, or [`HarnessError::FootprintOverflow`] if the total
    /// layout does not fit in `usize`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "trace",
            skip_all,
            fields(len = data.len(), inc = %inc, guard_factor = config.guard_factor)
        )
    )]
    pub fn with_config(
        data: &[T],
        inc: Increment,
        config: &GuardConfig,
    ) -> Result<Self, HarnessError> {
        config.validate()?;
        let guard = config.guard_len(inc)?;
        let footprint = inc.footprint(data.len())?;
        let total = footprint
            .checked_add(guard)
            .and_then(|v| v.checked_add(guard))
            .ok_or(HarnessError::FootprintOverflow {
                len: data.len(),
                inc: inc.get(),
            })?;

        let front = Span::new(0, guard);
        let vector = Span::new(guard, footprint);
        let back = Span::new(guard + footprint, guard);

        let mut whole = vec![T::SENTINEL; total];
        let v = &mut whole[vector.range()];
        for (i, &d) in data.iter().enumerate() {
            v[inc.offset(i)] = d;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(guard, footprint, total, "allocated guarded vector");

        Ok(Self {
            data: whole,
            front,
            vector,
            back,
            inc,
            len: data.len(),
        })
    }

    /// Returns `true` if neither guard has been written.
    pub fn guards_intact(&self) -> bool {
        self.front_guard().iter().all(|v| v.is_sentinel())
            && self.back_guard().iter().all(|v| v.is_sentinel())
    }

    /// Read the logical elements back out of the vector view.
    ///
    /// Element `i` is taken from vector offset `i * |inc|`.
    pub fn gather(&self) -> Vec<T> {
        let v = self.vector();
        (0..self.len).map(|i| v[self.inc.offset(i)]).collect()
    }
}

impl<T> GuardedVec<T> {
    /// The strided vector view.
    pub fn vector(&self) -> &[T] {
        &self.data[self.vector.range()]
    }

    /// Mutable strided vector view, for passing to code under test.
    pub fn vector_mut(&mut self) -> &mut [T] {
        &mut self.data[self.vector.range()]
    }

    /// The leading guard.
    pub fn front_guard(&self) -> &[T] {
        &self.data[self.front.range()]
    }

    /// The trailing guard.
    pub fn back_guard(&self) -> &[T] {
        &self.data[self.back.range()]
    }

    /// The whole backing buffer: `front | vector | back`.
    pub fn whole(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the whole backing buffer.
    ///
    /// Lets a test simulate an out-of-bounds write.
    pub fn whole_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Split into disjoint mutable `(front, vector, back)` views.
    pub fn views_mut(&mut self) -> (&mut [T], &mut [T], &mut [T]) {
        let (front, rest) = self.data.split_at_mut(self.front.len);
        let (vector, back) = rest.split_at_mut(self.vector.len);
        (front, vector, back)
    }

    /// Span of the leading guard in the backing buffer.
    pub fn front_span(&self) -> Span {
        self.front
    }

    /// Span of the vector view in the backing buffer.
    pub fn vector_span(&self) -> Span {
        self.vector
    }

    /// Span of the trailing guard in the backing buffer.
    pub fn back_span(&self) -> Span {
        self.back
    }

    /// Length of each guard region.
    pub fn guard_len(&self) -> usize {
        self.front.len
    }

    /// Number of logical elements (not the footprint).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector holds no logical elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The signed increment the vector was laid out with.
    pub fn inc(&self) -> Increment {
        self.inc
    }

    /// Classify a backing position. Returns `None` past the end.
    pub fn locate(&self, pos: usize) -> Option<Region> {
        if self.front.contains(pos) {
            Some(Region::FrontGuard(pos - self.front.offset))
        } else if self.vector.contains(pos) {
            Some(Region::Vector(pos - self.vector.offset))
        } else if self.back.contains(pos) {
            Some(Region::BackGuard(pos - self.back.offset))
        } else {
            None
        }
    }

    /// Consume the buffer and return the backing storage.
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}
