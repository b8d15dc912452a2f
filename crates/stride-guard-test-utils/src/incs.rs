//! Alignment tables and increment cross-products for parameterized tests.
//!
//! Everything here is deterministic. Candidate increments are taken as
//! given; a zero candidate is passed through and will be rejected by the
//! allocator when used.

/// Offset pair for two-operand kernels. Each offset is 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Align2 {
    /// Offset applied to the first operand.
    pub x: usize,
    /// Offset applied to the second operand.
    pub y: usize,
}

/// Offset triple for three-operand kernels. Each offset is 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Align3 {
    /// Offset applied to the first operand.
    pub x: usize,
    /// Offset applied to the second operand.
    pub y: usize,
    /// Offset applied to the third operand.
    pub z: usize,
}

/// All four 0/1 offset pairs.
pub const ALIGN2: [Align2; 4] = [
    Align2 { x: 0, y: 0 },
    Align2 { x: 0, y: 1 },
    Align2 { x: 1, y: 0 },
    Align2 { x: 1, y: 1 },
];

/// All eight 0/1 offset triples, ordered by number of set offsets.
pub const ALIGN3: [Align3; 8] = [
    Align3 { x: 0, y: 0, z: 0 },
    Align3 { x: 0, y: 0, z: 1 },
    Align3 { x: 0, y: 1, z: 0 },
    Align3 { x: 1, y: 0, z: 0 },
    Align3 { x: 0, y: 1, z: 1 },
    Align3 { x: 1, y: 0, z: 1 },
    Align3 { x: 1, y: 1, z: 0 },
    Align3 { x: 1, y: 1, z: 1 },
];

/// Increments for a kernel reading `x` and `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IncSet {
    /// Increment of `x`.
    pub x: isize,
    /// Increment of `y`.
    pub y: isize,
}

/// Increments for a kernel writing `dst` from `x` and `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IncToSet {
    /// Increment of the destination.
    pub dst: isize,
    /// Increment of `x`.
    pub x: isize,
    /// Increment of `y`.
    pub y: isize,
}

/// Every `(x, y)` pair drawn from `inc`, `x` major.
///
/// Returns `inc.len()²` entries.
pub fn gen_inc(inc: &[isize]) -> Vec<IncSet> {
    let mut out = Vec::with_capacity(inc.len() * inc.len());
    for &x in inc {
        for &y in inc {
            out.push(IncSet { x, y });
        }
    }
    out
}

/// Every `(dst, x, y)` triple drawn from `inc`, `dst` major then `x`.
///
/// Returns `inc.len()³` entries.
pub fn gen_inc_to(inc: &[isize]) -> Vec<IncToSet> {
    let n = inc.len();
    let mut out = Vec::with_capacity(n * n * n);
    for &dst in inc {
        for &x in inc {
            for &y in inc {
                out.push(IncToSet { dst, x, y });
            }
        }
    }
    out
}
