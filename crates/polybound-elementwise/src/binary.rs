//! Element-wise binary and unary operators
//!
//! [`zip_with`] and [`map_with`] carry the kind logic once; the named
//! operators are thin wrappers passing a closure. Both operands of a binary
//! operation must have the same length. For two arrays a mismatch does not
//! compile, otherwise it is a contract violation.
//!
//! ```rust
//! use polybound_elementwise::{add, mul_scalar};
//!
//! let s: [i32; 3] = add(&[1, 2, 3], &[10, 20, 30]);
//! assert_eq!(s, [11, 22, 33]);
//!
//! let d: Vec<f64> = mul_scalar(&vec![1.0, 2.0], 0.5);
//! assert_eq!(d, vec![0.5, 1.0]);
//! ```

use polybound_core::bounds::{self, MinOf};
use polybound_core::{check, make_uninit, Bounds, Materialize, Scalar, Sequence};

/// Size-bounds descriptor of an element-wise binary result
pub fn zip_bounds<X, Y>(x: &X, y: &Y) -> Bounds<MinOf<X::Bounds, Y::Bounds>>
where
    X: Sequence + ?Sized,
    Y: Sequence + ?Sized,
{
    const {
        assert!(
            X::SIZE.compatible(Y::SIZE),
            "element-wise operands have different compile-time sizes"
        )
    };
    check!(
        x.len() == y.len(),
        "element-wise operands have different lengths: {} and {}",
        x.len(),
        y.len()
    );
    bounds::min(x.size_bounds(), y.size_bounds())
}

/// `r[i] = op(x[i], y[i])`
pub fn zip_with<R, X, Y, T, U, F>(x: &X, y: &Y, mut op: F) -> R
where
    X: Sequence<Item = T> + ?Sized,
    Y: Sequence<Item = T> + ?Sized,
    R: Materialize<Item = U>,
    T: Copy,
    F: FnMut(T, T) -> U,
{
    let mut result: R = make_uninit(&zip_bounds(x, y));
    for ((r, &a), &b) in result
        .as_mut_slice()
        .iter_mut()
        .zip(x.as_slice())
        .zip(y.as_slice())
    {
        *r = op(a, b);
    }
    result
}

/// `r[i] = op(x[i])`; the result has the kind and length of `x`
pub fn map_with<R, X, T, U, F>(x: &X, mut op: F) -> R
where
    X: Sequence<Item = T> + ?Sized,
    R: Materialize<Item = U>,
    T: Copy,
    F: FnMut(T) -> U,
{
    let mut result: R = make_uninit(&x.size_bounds());
    for (r, &a) in result.as_mut_slice().iter_mut().zip(x.as_slice()) {
        *r = op(a);
    }
    result
}

macro_rules! zip_op {
    ($(#[$doc:meta])* $name:ident, |$a:ident, $b:ident| $body:expr) => {
        $(#[$doc])*
        pub fn $name<R, X, Y, T>(x: &X, y: &Y) -> R
        where
            X: Sequence<Item = T> + ?Sized,
            Y: Sequence<Item = T> + ?Sized,
            R: Materialize<Item = T>,
            T: Scalar,
        {
            zip_with(x, y, |$a: T, $b: T| $body)
        }
    };
}

macro_rules! scalar_op {
    ($(#[$doc:meta])* $name:ident, |$a:ident, $s:ident| $body:expr) => {
        $(#[$doc])*
        pub fn $name<R, X, T>(x: &X, s: T) -> R
        where
            X: Sequence<Item = T> + ?Sized,
            R: Materialize<Item = T>,
            T: Scalar,
        {
            map_with(x, |$a: T| {
                let $s = s;
                $body
            })
        }
    };
}

zip_op!(
    /// `x[i] + y[i]`
    add, |a, b| a + b
);
zip_op!(
    /// `x[i] - y[i]`
    sub, |a, b| a - b
);
zip_op!(
    /// `x[i] * y[i]`
    mul, |a, b| a * b
);
zip_op!(
    /// `x[i] / y[i]`
    div, |a, b| a / b
);
zip_op!(
    /// Element-wise minimum; `x[i]` wins ties and unordered pairs
    min_ew, |a, b| if b < a { b } else { a }
);
zip_op!(
    /// Element-wise maximum; `x[i]` wins ties and unordered pairs
    max_ew, |a, b| if b > a { b } else { a }
);

scalar_op!(
    /// `x[i] + s`
    add_scalar, |a, s| a + s
);
scalar_op!(
    /// `x[i] - s`
    sub_scalar, |a, s| a - s
);
scalar_op!(
    /// `x[i] * s`
    mul_scalar, |a, s| a * s
);
scalar_op!(
    /// `x[i] / s`
    div_scalar, |a, s| a / s
);

/// `s / x[i]`
pub fn scalar_div<R, X, T>(s: T, x: &X) -> R
where
    X: Sequence<Item = T> + ?Sized,
    R: Materialize<Item = T>,
    T: Scalar,
{
    map_with(x, |a: T| s / a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use polybound_core::{Extent, InlineVec};

    #[test]
    fn test_static_operands() {
        let x = [1, 5, 3];
        let y = [4, 2, 6];
        let r: [i32; 3] = sub(&x, &y);
        assert_eq!(r, [-3, 3, -3]);
        let r: [i32; 3] = min_ew(&x, &y);
        assert_eq!(r, [1, 2, 3]);
        let r: [i32; 3] = max_ew(&x, &y);
        assert_eq!(r, [4, 5, 6]);
    }

    #[test]
    fn test_mixed_kinds_give_bounded_result() {
        let x = InlineVec::<i32, 4>::from_slice(&[1, 2]);
        let y = vec![3, 4];
        let b = zip_bounds(&x, &y);
        assert_eq!((b.capacity(), b.size()), (Extent::Known(4), Extent::Runtime));
        let r: InlineVec<i32, 4> = mul(&x, &y);
        assert_eq!(r, [3, 8]);

        let r: Vec<i32> = add(&y, &y);
        assert_eq!(r, vec![6, 8]);
    }

    #[test]
    #[should_panic(expected = "element-wise operands have different lengths: 2 and 3")]
    fn test_length_mismatch() {
        let _: Vec<i32> = add(&vec![1, 2], &vec![1, 2, 3]);
    }

    #[test]
    fn test_scalar_variants() {
        let x = [2.0, 4.0, 8.0];
        let r: [f64; 3] = add_scalar(&x, 1.0);
        assert_eq!(r, [3.0, 5.0, 9.0]);
        let r: [f64; 3] = sub_scalar(&x, 1.0);
        assert_eq!(r, [1.0, 3.0, 7.0]);
        let r: [f64; 3] = div_scalar(&x, 2.0);
        assert_eq!(r, [1.0, 2.0, 4.0]);
        let r: [f64; 3] = scalar_div(1.0, &x);
        assert_relative_eq!(r[2], 0.125);
        let r: [f64; 3] = div(&x, &[2.0, 2.0, 4.0]);
        assert_eq!(r, [1.0, 2.0, 2.0]);
    }

    #[test]
    fn test_map_with_changes_item_type() {
        let lens: [usize; 2] = map_with(&["ab", "cde"], str::len);
        assert_eq!(lens, [2, 3]);
        let r: Vec<i64> = zip_with(&[1i32, 2][..], &[3, 4][..], |a, b| i64::from(a * b));
        assert_eq!(r, vec![3, 8]);
    }
}
