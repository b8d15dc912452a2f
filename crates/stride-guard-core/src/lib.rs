//! Core types and traits for the stride-guard test harness.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: the signed
//! [`Increment`] type, the [`Sentinel`] element trait with its NaN-aware
//! [`same`] comparison, and [`HarnessError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod error;
pub mod inc;

pub use element::{same, Sentinel};
pub use error::HarnessError;
pub use inc::Increment;
