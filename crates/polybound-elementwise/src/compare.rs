//! Element-wise comparisons and boolean reductions
//!
//! Comparisons produce a boolean sequence of the operands' kind, which the
//! reductions collapse:
//!
//! ```rust
//! use polybound_elementwise::{all_of, compare_scalar, Cmp};
//!
//! let positive: [bool; 3] = compare_scalar(&[1.0, 2.5, 0.1], 0.0, Cmp::Gt);
//! assert!(all_of(&positive));
//! ```

use polybound_core::{Materialize, Sequence};

use crate::binary::{map_with, zip_with};

/// A comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cmp {
    Lt,
    Gt,
    Eq,
    Ne,
    Le,
    Ge,
}

impl Cmp {
    /// `a <op> b`
    #[inline]
    pub fn apply<T: PartialOrd + ?Sized>(self, a: &T, b: &T) -> bool {
        match self {
            Cmp::Lt => a < b,
            Cmp::Gt => a > b,
            Cmp::Eq => a == b,
            Cmp::Ne => a != b,
            Cmp::Le => a <= b,
            Cmp::Ge => a >= b,
        }
    }

    /// Operator with swapped operands, so `s <op> x` is `x <op.swapped()> s`
    pub const fn swapped(self) -> Self {
        match self {
            Cmp::Lt => Cmp::Gt,
            Cmp::Gt => Cmp::Lt,
            Cmp::Le => Cmp::Ge,
            Cmp::Ge => Cmp::Le,
            Cmp::Eq => Cmp::Eq,
            Cmp::Ne => Cmp::Ne,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Cmp::Lt => "<",
            Cmp::Gt => ">",
            Cmp::Eq => "==",
            Cmp::Ne => "!=",
            Cmp::Le => "<=",
            Cmp::Ge => ">=",
        }
    }
}

/// `x[i] <cmp> y[i]`; lengths must match
pub fn compare<R, X, Y, T>(x: &X, y: &Y, cmp: Cmp) -> R
where
    X: Sequence<Item = T> + ?Sized,
    Y: Sequence<Item = T> + ?Sized,
    R: Materialize<Item = bool>,
    T: PartialOrd + Copy,
{
    zip_with(x, y, |a, b| cmp.apply(&a, &b))
}

/// `x[i] <cmp> s`
pub fn compare_scalar<R, X, T>(x: &X, s: T, cmp: Cmp) -> R
where
    X: Sequence<Item = T> + ?Sized,
    R: Materialize<Item = bool>,
    T: PartialOrd + Copy,
{
    map_with(x, |a| cmp.apply(&a, &s))
}

/// Whether any element is `true`
pub fn any_of<S: Sequence<Item = bool> + ?Sized>(mask: &S) -> bool {
    mask.as_slice().iter().any(|&b| b)
}

/// Whether every element is `true`; `true` for an empty mask
pub fn all_of<S: Sequence<Item = bool> + ?Sized>(mask: &S) -> bool {
    mask.as_slice().iter().all(|&b| b)
}

/// Whether no element is `true`
pub fn none_of<S: Sequence<Item = bool> + ?Sized>(mask: &S) -> bool {
    !any_of(mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polybound_core::InlineVec;

    const ALL: [Cmp; 6] = [Cmp::Lt, Cmp::Gt, Cmp::Eq, Cmp::Ne, Cmp::Le, Cmp::Ge];

    #[test]
    fn test_compare_static() {
        let x = [1, 2, 3];
        let y = [3, 2, 1];
        let r: [bool; 3] = compare(&x, &y, Cmp::Lt);
        assert_eq!(r, [true, false, false]);
        let r: [bool; 3] = compare(&x, &y, Cmp::Ge);
        assert_eq!(r, [false, true, true]);
        let r: [bool; 3] = compare(&x, &y, Cmp::Eq);
        assert!(any_of(&r) && !all_of(&r));
    }

    #[test]
    fn test_compare_scalar_kinds() {
        let x = InlineVec::<i32, 5>::from_slice(&[-1, 0, 1]);
        let r: InlineVec<bool, 5> = compare_scalar(&x, 0, Cmp::Ne);
        assert_eq!(r, [true, false, true]);
        let r: Vec<bool> = compare_scalar(&x.to_vec(), 5, Cmp::Gt);
        assert!(none_of(&r));
    }

    #[test]
    fn test_swapped_matches_flipped_operands() {
        for cmp in ALL {
            for (a, b) in [(1, 2), (2, 2), (3, 2)] {
                assert_eq!(cmp.apply(&a, &b), cmp.swapped().apply(&b, &a), "{}", cmp.symbol());
            }
        }
    }

    #[test]
    fn test_nan_is_unordered() {
        let r: [bool; 2] = compare_scalar(&[f64::NAN, 1.0], 1.0, Cmp::Le);
        assert_eq!(r, [false, true]);
        let r: [bool; 2] = compare_scalar(&[f64::NAN, 1.0], 1.0, Cmp::Ne);
        assert_eq!(r, [true, false]);
    }

    #[test]
    fn test_empty_mask_reductions() {
        let empty: Vec<bool> = Vec::new();
        assert!(!any_of(&empty));
        assert!(all_of(&empty));
        assert!(none_of(&empty));
    }
}
