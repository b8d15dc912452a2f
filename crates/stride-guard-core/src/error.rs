//! Error types for the stride-guard harness.
//!
//! Only configuration mistakes are represented here. Corruption detected
//! in a guarded buffer is a test failure and is reported by panicking
//! assertions in `stride-guard-test-utils`, never as a `HarnessError`.

use std::error::Error;
use std::fmt;

/// Errors raised while configuring a guarded test case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HarnessError {
    /// An increment of zero was supplied. Strided layouts need `|inc| >= 1`.
    ZeroIncrement,
    /// A configuration struct failed validation.
    InvalidConfig {
        /// Human-readable description of the rejected value.
        reason: String,
    },
    /// The strided footprint of `len` elements at `inc` does not fit in `usize`.
    FootprintOverflow {
        /// Number of logical elements requested.
        len: usize,
        /// The signed increment used for the layout.
        inc: isize,
    },
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroIncrement => write!(f, "increment must be non-zero"),
            Self::InvalidConfig { reason } => write!(f, "invalid configuration: {reason}"),
            Self::FootprintOverflow { len, inc } => {
                write!(
                    f,
                    "strided footprint overflows usize: {len} elements at increment {inc}"
                )
            }
        }
    }
}

impl Error for HarnessError {}
