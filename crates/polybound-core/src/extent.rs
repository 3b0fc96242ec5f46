//! Compile-time size components
//!
//! An [`Extent`] is one half of a size-bounds descriptor: either a concrete
//! integer known while compiling, or [`Extent::Runtime`] when the value only
//! exists in a live object. All operators are `const fn` so they can be
//! evaluated inside associated constants and `const` blocks.

use std::fmt;

/// Compile-time capacity or size of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extent {
    /// The value is fixed by the type
    Known(i32),
    /// The value is only available from an instance
    Runtime,
}

impl Extent {
    /// Build a known extent from a `usize` const parameter
    pub const fn of(n: usize) -> Self {
        assert!(n <= i32::MAX as usize, "extent does not fit in i32");
        Extent::Known(n as i32)
    }

    /// `true` when the value is fixed by the type
    pub const fn is_known(self) -> bool {
        matches!(self, Extent::Known(_))
    }

    /// The concrete value, if any
    pub const fn get(self) -> Option<i32> {
        match self {
            Extent::Known(n) => Some(n),
            Extent::Runtime => None,
        }
    }

    /// `true` when both extents are known and equal
    pub const fn eq_known(self, other: Self) -> bool {
        match (self, other) {
            (Extent::Known(a), Extent::Known(b)) => a == b,
            _ => false,
        }
    }

    /// `false` only when both extents are known and differ
    pub const fn compatible(self, other: Self) -> bool {
        match (self, other) {
            (Extent::Known(a), Extent::Known(b)) => a == b,
            _ => true,
        }
    }

    pub const fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Extent::Known(a), Extent::Known(b)) => Extent::Known(a + b),
            _ => Extent::Runtime,
        }
    }

    pub const fn neg(self) -> Self {
        match self {
            Extent::Known(a) => Extent::Known(-a),
            Extent::Runtime => Extent::Runtime,
        }
    }

    pub const fn sub(self, rhs: Self) -> Self {
        self.add(rhs.neg())
    }

    pub const fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Extent::Known(a), Extent::Known(b)) => Extent::Known(a * b),
            _ => Extent::Runtime,
        }
    }

    /// Exact minimum; runtime if either side is runtime
    pub const fn min(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Extent::Known(a), Extent::Known(b)) => Extent::Known(if a < b { a } else { b }),
            _ => Extent::Runtime,
        }
    }

    /// Exact maximum; runtime if either side is runtime
    pub const fn max(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Extent::Known(a), Extent::Known(b)) => Extent::Known(if a > b { a } else { b }),
            _ => Extent::Runtime,
        }
    }

    /// Upper bound of the minimum of two capacities
    ///
    /// When only one side is known, the minimum can never exceed it, so the
    /// known side is returned.
    pub const fn min_capacity(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Extent::Known(a), Extent::Known(b)) => Extent::Known(if a < b { a } else { b }),
            (Extent::Known(a), Extent::Runtime) => Extent::Known(a),
            (Extent::Runtime, Extent::Known(b)) => Extent::Known(b),
            (Extent::Runtime, Extent::Runtime) => Extent::Runtime,
        }
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extent::Known(n) => write!(f, "{n}"),
            Extent::Runtime => f.write_str("runtime"),
        }
    }
}
