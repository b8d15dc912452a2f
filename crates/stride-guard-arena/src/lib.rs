//! Guarded strided buffers for out-of-bounds detection.
//!
//! A [`GuardedVec`] is a single owned `Vec<T>` partitioned by three
//! [`Span`]s into index ranges:
//!
//! ```text
//! GuardedVec<T>
//! ├── data: Vec<T>            (one contiguous allocation, NaN-filled)
//! ├── front: Span             guard_factor * |inc| sentinels
//! ├── vector: Span            (n - 1) * |inc| + 1 elements, data at i * |inc|
//! └── back: Span              guard_factor * |inc| sentinels
//! ```
//!
//! Because the guards are directly adjacent to the vector view in the
//! same allocation, a kernel that strays past either end of its
//! footprint leaves a non-NaN value in a guard, and a kernel that reads
//! past the end picks up NaN and poisons its result.
//!
//! # Features
//!
//! - `tracing`: instrument allocation with a `tracing` span.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod guarded;
pub mod span;

pub use config::GuardConfig;
pub use guarded::{GuardedVec, Region};
pub use span::Span;
