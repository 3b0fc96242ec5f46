//! Reductions to a single value
//!
//! Every fold starts from the first element, so the input must not be empty.
//! An array of length zero does not compile; an empty runtime input is a
//! contract violation.

use polybound_core::factory::may_be_nonempty;
use polybound_core::{check, Scalar, Sequence};

/// `f(...f(f(x[0], x[1]), x[2])..., x[n-1])`
///
/// ```rust
/// use polybound_elementwise::fold_with;
///
/// let longest = fold_with(&["ab", "abcd", "a"], |a, b| if b.len() > a.len() { b } else { a });
/// assert_eq!(longest, "abcd");
/// ```
pub fn fold_with<X, T, F>(x: &X, mut f: F) -> T
where
    X: Sequence<Item = T> + ?Sized,
    T: Copy,
    F: FnMut(T, T) -> T,
{
    const { assert!(may_be_nonempty(X::CAPACITY), "fold over a sequence of zero size") };
    check!(!x.is_empty(), "fold over an empty sequence");
    let items = x.as_slice();
    items[1..].iter().fold(items[0], |acc, &v| f(acc, v))
}

/// Sum of the elements
pub fn sum<X, T>(x: &X) -> T
where
    X: Sequence<Item = T> + ?Sized,
    T: Scalar,
{
    fold_with(x, |a, b| a + b)
}

/// Product of the elements
pub fn prod<X, T>(x: &X) -> T
where
    X: Sequence<Item = T> + ?Sized,
    T: Scalar,
{
    fold_with(x, |a, b| a * b)
}

/// Smallest element; the earliest one wins ties
pub fn min<X, T>(x: &X) -> T
where
    X: Sequence<Item = T> + ?Sized,
    T: PartialOrd + Copy,
{
    fold_with(x, |a, b| if b < a { b } else { a })
}

/// Largest element; the earliest one wins ties
pub fn max<X, T>(x: &X) -> T
where
    X: Sequence<Item = T> + ?Sized,
    T: PartialOrd + Copy,
{
    fold_with(x, |a, b| if b > a { b } else { a })
}

/// Whether `x` lies in the half-open interval `[lower, upper)`
///
/// `lower <= upper` is required.
pub fn within_co<T: PartialOrd + ?Sized>(x: &T, lower: &T, upper: &T) -> bool {
    check!(lower <= upper, "within_co: lower bound exceeds upper bound");
    lower <= x && x < upper
}
