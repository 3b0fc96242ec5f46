//! Polynomial evaluation and calculus
//!
//! Coefficients are ordered from the constant term upwards:
//! `[a0, a1, a2]` is `a0 + a1*x + a2*x^2`.

use polybound_core::bounds::constant;
use polybound_core::factory::may_be_nonempty;
use polybound_core::{check, make_uninit, Materialize, Scalar, Sequence};

/// Evaluate `p` at `x`
///
/// Powers of `x` are built incrementally, one multiplication per term. An
/// empty polynomial evaluates to zero.
pub fn polyval<P, T>(p: &P, x: T) -> T
where
    P: Sequence<Item = T> + ?Sized,
    T: Scalar,
{
    let p = p.as_slice();
    match p.len() {
        0 => T::zero(),
        1 => p[0],
        2 => p[0] + x * p[1],
        _ => {
            let mut xa = x;
            let mut acc = p[0] + p[1] * x;
            for &c in &p[2..] {
                xa *= x;
                acc += c * xa;
            }
            acc
        }
    }
}

/// Derivative of `p`; `result[i] = (i + 1) * p[i + 1]`
///
/// The result has one coefficient less than `p`, so `[T; N]` maps to
/// `[T; N - 1]` and `InlineVec<T, N>` to an inline vector of capacity `N - 1`
/// or more. An input whose type proves it empty does not compile; an empty
/// runtime input is a contract violation.
///
/// ```rust
/// use polybound_poly::polyder;
///
/// let d: [i32; 3] = polyder(&[456, 345, 234, 123]);
/// assert_eq!(d, [345, 468, 369]);
/// ```
pub fn polyder<R, P, T>(p: &P) -> R
where
    P: Sequence<Item = T> + ?Sized,
    R: Materialize<Item = T>,
    T: Scalar,
{
    const { assert!(may_be_nonempty(P::CAPACITY), "polyder: argument has zero size") };
    check!(!p.is_empty(), "polyder: argument has zero size");

    let mut result: R = make_uninit(&(p.size_bounds() - constant::<1>()));
    let p = p.as_slice();
    let out = result.as_mut_slice();
    check!(out.len() + 1 == p.len());

    let mut k = T::one();
    for (r, &c) in out.iter_mut().zip(&p[1..]) {
        *r = k * c;
        k += T::one();
    }
    result
}

/// Antiderivative of `p` with integration constant `c0`
///
/// `result[0] = c0` and `result[i + 1] = p[i] / (i + 1)`. Integer coefficients
/// divide with truncation.
///
/// ```rust
/// use polybound_poly::polyint;
///
/// let v: Vec<f64> = polyint(&vec![3.0, 2.0], 1.0);
/// assert_eq!(v, vec![1.0, 3.0, 1.0]);
/// ```
pub fn polyint<R, P, T>(p: &P, c0: T) -> R
where
    P: Sequence<Item = T> + ?Sized,
    R: Materialize<Item = T>,
    T: Scalar,
{
    const { assert!(may_be_nonempty(P::CAPACITY), "polyint: argument has zero size") };
    check!(!p.is_empty(), "polyint: argument has zero size");

    let mut result: R = make_uninit(&(p.size_bounds() + constant::<1>()));
    let p = p.as_slice();
    let out = result.as_mut_slice();
    check!(out.len() == p.len() + 1);

    out[0] = c0;
    let mut k = T::one();
    for (r, &c) in out[1..].iter_mut().zip(p) {
        *r = c / k;
        k += T::one();
    }
    result
}
