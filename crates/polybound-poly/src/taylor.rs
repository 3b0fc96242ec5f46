//! Derivatives of the trigonometric functions and their Taylor polynomials
//!
//! `taylor_*::<N>(a)` returns the degree `N - 1` Taylor polynomial around `a`
//! already expanded into powers of `x`, ready for [`polyval`](crate::polyval).

use num_traits::Float;
use polybound_core::check;

/// Highest supported derivative order of `tan`
pub const MAX_TAN_DERIVATIVE: u32 = 3;

fn sin_derivative<T: Float>(order: u32, x: T) -> T {
    match order % 4 {
        0 => x.sin(),
        1 => x.cos(),
        2 => -x.sin(),
        _ => -x.cos(),
    }
}

fn cos_derivative<T: Float>(order: u32, x: T) -> T {
    match order % 4 {
        0 => x.cos(),
        1 => -x.sin(),
        2 => -x.cos(),
        _ => x.sin(),
    }
}

fn tan_derivative<T: Float>(order: u32, x: T) -> T {
    let two = T::one() + T::one();
    let sec = x.cos().recip();
    let sec2 = sec * sec;
    match order {
        0 => x.tan(),
        1 => sec2,
        2 => two * sec2 * x.tan(),
        _ => {
            check!(order == 3, "tan derivatives are implemented up to order 3");
            let st = sec * x.tan();
            (two + two) * st * st + two * sec2 * sec2
        }
    }
}

/// `D`-th derivative of `sin` at `x`
pub fn diffsin<const D: u32, T: Float>(x: T) -> T {
    sin_derivative(D, x)
}

/// `D`-th derivative of `cos` at `x`
pub fn diffcos<const D: u32, T: Float>(x: T) -> T {
    cos_derivative(D, x)
}

/// `D`-th derivative of `tan` at `x`, for `D <= 3`
pub fn difftan<const D: u32, T: Float>(x: T) -> T {
    const {
        assert!(
            D <= MAX_TAN_DERIVATIVE,
            "tan derivatives are implemented up to order 3"
        )
    };
    tan_derivative(D, x)
}

/// Expand `sum(d[k] / k! * (x - a)^k)` into coefficients of powers of `x`
fn expand<const N: usize, T: Float>(a: T, derivative: impl Fn(u32, T) -> T) -> [T; N] {
    const { assert!(1 <= N && N <= 4, "Taylor series are implemented for 1 to 4 terms") };
    let mut coeffs = [T::zero(); N];
    // Coefficients of (x - a)^k, updated in place for each k.
    let mut shifted = [T::zero(); N];
    shifted[0] = T::one();
    let mut factorial = T::one();
    let mut k_t = T::zero();

    for k in 0..N {
        if k > 0 {
            k_t = k_t + T::one();
            factorial = factorial * k_t;
            for j in (0..=k).rev() {
                let lower = if j > 0 { shifted[j - 1] } else { T::zero() };
                shifted[j] = lower - a * shifted[j];
            }
        }
        let term = derivative(k as u32, a) / factorial;
        for (c, &s) in coeffs.iter_mut().zip(&shifted) {
            *c = *c + term * s;
        }
    }
    coeffs
}

/// Taylor polynomial of `sin` around `a` with `N` coefficients
///
/// ```rust
/// use polybound_poly::taylor::taylor_sin;
///
/// let p: [f64; 2] = taylor_sin(0.0);
/// assert_eq!(p, [0.0, 1.0]);
/// ```
pub fn taylor_sin<const N: usize, T: Float>(a: T) -> [T; N] {
    expand(a, sin_derivative)
}

/// Taylor polynomial of `cos` around `a` with `N` coefficients
pub fn taylor_cos<const N: usize, T: Float>(a: T) -> [T; N] {
    expand(a, cos_derivative)
}

/// Taylor polynomial of `tan` around `a` with `N` coefficients
pub fn taylor_tan<const N: usize, T: Float>(a: T) -> [T; N] {
    expand(a, tan_derivative)
}
