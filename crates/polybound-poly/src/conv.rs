//! Discrete convolution
//!
//! `conv(x, y)` multiplies the polynomials `x` and `y`. The result has
//! `|x| + |y| - 1` coefficients, none when either input is empty, and its
//! container kind follows from the inputs' kinds:
//!
//! | `x` | `y` | result |
//! |-----|-----|--------|
//! | `[T; N]` | `[T; M]` | `[T; N + M - 1]` |
//! | `[T; N]` or `InlineVec<T, N>` | `[T; M]` or `InlineVec<T, M>` | `InlineVec<T, N + M - 1>` |
//! | anything | `Vec<T>` or `[T]` | `Vec<T>` |
//!
//! The direct O(|x|·|y|) algorithm is used throughout.

use polybound_core::bounds::{self, constant, Constant, MinOf, NegOf, ProductOf, SumOf};
use polybound_core::factory::may_be_nonempty;
use polybound_core::{
    check, make_zeroed, Bounds, Error, Materialize, Result, Scalar, Sequence, SequenceMut,
    SizeExpr,
};

/// `min(n, 1)`: one for a non-empty operand, zero for an empty one
type NonEmpty<X> = MinOf<X, Constant<1>>;

/// Descriptor type of `conv(x, y)` for inputs described by `X` and `Y`
pub type ConvBounds<X, Y> =
    ProductOf<ProductOf<NonEmpty<X>, NonEmpty<Y>>, SumOf<SumOf<X, Y>, NegOf<Constant<1>>>>;

/// Size-bounds descriptor of the convolution of `x` and `y`
///
/// `min(x, 1) * min(y, 1) * (x + y - 1)`: the leading factors are one for
/// non-empty inputs and zero when either input is empty. Inputs whose type
/// proves them empty do not compile.
pub fn conv_result_bounds<X, Y>(x: &X, y: &Y) -> Bounds<ConvBounds<X::Bounds, Y::Bounds>>
where
    X: Sequence + ?Sized,
    Y: Sequence + ?Sized,
{
    const { assert!(may_be_nonempty(X::CAPACITY), "conv: first argument has zero size") };
    const { assert!(may_be_nonempty(Y::CAPACITY), "conv: second argument has zero size") };
    let (xb, yb) = (x.size_bounds(), y.size_bounds());
    let one = constant::<1>();
    bounds::min(xb, one) * bounds::min(yb, one) * (xb + yb - one)
}

/// `out[i + j] += x[i] * y[j]` over all index pairs; `out` must be zeroed and large enough
fn accumulate<T: Scalar>(x: &[T], y: &[T], out: &mut [T]) {
    if x.is_empty() || y.is_empty() {
        return;
    }
    for (i, &a) in x.iter().enumerate() {
        for (o, &b) in out[i..].iter_mut().zip(y) {
            *o += a * b;
        }
    }
}

fn output_len<X, Y>(x: &X, y: &Y) -> usize
where
    X: Sequence + ?Sized,
    Y: Sequence + ?Sized,
{
    conv_result_bounds(x, y).runtime_size().max(0) as usize
}

/// Convolution of `x` and `y`
///
/// An empty runtime input gives an empty result.
///
/// ```rust
/// use polybound_poly::conv;
///
/// let r: [i32; 4] = conv(&[1, 1], &[1, 2, 1]);
/// assert_eq!(r, [1, 3, 3, 1]);
/// ```
pub fn conv<R, X, Y, T>(x: &X, y: &Y) -> R
where
    X: Sequence<Item = T> + ?Sized,
    Y: Sequence<Item = T> + ?Sized,
    R: Materialize<Item = T>,
    T: Scalar,
{
    let mut result: R = make_zeroed(&conv_result_bounds(x, y));
    accumulate(x.as_slice(), y.as_slice(), result.as_mut_slice());
    result
}

/// Convolution of `x` and `y` written into `out`
///
/// Resizable outputs are resized to the result length. Fixed outputs must
/// already have that length: when both lengths are compile-time constants a
/// mismatch does not compile, otherwise it is a contract violation.
///
/// ```rust
/// use polybound_poly::conv_into;
///
/// let mut out = vec![7; 10];
/// conv_into(&[1, 2], &[3, 4], &mut out);
/// assert_eq!(out, vec![3, 10, 8]);
/// ```
pub fn conv_into<X, Y, O, T>(x: &X, y: &Y, out: &mut O)
where
    X: Sequence<Item = T> + ?Sized,
    Y: Sequence<Item = T> + ?Sized,
    O: SequenceMut<Item = T> + ?Sized,
    T: Scalar,
{
    const {
        assert!(
            O::SIZE.compatible(<ConvBounds<X::Bounds, Y::Bounds> as SizeExpr>::SIZE),
            "conv_into: output size differs from the convolution size"
        )
    };
    let target = output_len(x, y);

    if O::RESIZABLE {
        let keep = target.min(out.len());
        out.as_mut_slice()[..keep].fill(T::zero());
        out.resize_to(target, T::zero());
    } else {
        check!(
            out.len() == target,
            "conv_into: output has {} elements, the convolution needs {}",
            out.len(),
            target
        );
        out.as_mut_slice().fill(T::zero());
    }
    accumulate(x.as_slice(), y.as_slice(), out.as_mut_slice());
}

/// Fallible [`conv_into`] for outputs whose length is only known at run time
///
/// A fixed output of the wrong length gives [`Error::SizeMismatch`] and is
/// left untouched. Resizable outputs never fail.
///
/// ```rust
/// use polybound_core::Error;
/// use polybound_poly::conv::try_conv_into;
///
/// let mut out = [0; 4];
/// assert!(matches!(
///     try_conv_into(&[1, 2], &[3, 4], &mut out[..]),
///     Err(Error::SizeMismatch { expected: 3, actual: 4, .. })
/// ));
/// assert!(try_conv_into(&[1, 2], &[3, 4], &mut out[..3]).is_ok());
/// assert_eq!(out, [3, 10, 8, 0]);
/// ```
pub fn try_conv_into<X, Y, O, T>(x: &X, y: &Y, out: &mut O) -> Result<()>
where
    X: Sequence<Item = T> + ?Sized,
    Y: Sequence<Item = T> + ?Sized,
    O: SequenceMut<Item = T> + ?Sized,
    T: Scalar,
{
    let target = output_len(x, y);
    if !O::RESIZABLE && out.len() != target {
        return Err(Error::size_mismatch(target, out.len(), "conv_into output"));
    }
    conv_into(x, y, out);
    Ok(())
}
