//! Polynomial composition

use polybound_core::bounds::constant;
use polybound_core::factory::may_be_nonempty;
use polybound_core::{check, make_uninit, make_zeroed, Materialize, Scalar, Sequence};

use crate::conv::conv_into;

/// Coefficients of `p(q(x))`
///
/// Both inputs must be non-empty. The result has `(|p| - 1) * (|q| - 1) + 1`
/// coefficients and is built as `sum(p[i] * q^i)`, with each power of `q`
/// obtained from the previous one by convolution.
///
/// The running power and its scratch copy are held in containers of the
/// result's own kind, so static inputs never touch the heap.
///
/// ```rust
/// use polybound_poly::{polycompose, polyval};
///
/// // p(y) = 1 + y^2, q(x) = 2 + x
/// let r: [i32; 3] = polycompose(&[1, 0, 1], &[2, 1]);
/// assert_eq!(r, [5, 4, 1]);
/// assert_eq!(polyval(&r, 3), polyval(&[1, 0, 1], polyval(&[2, 1], 3)));
/// ```
pub fn polycompose<R, P, Q, T>(p: &P, q: &Q) -> R
where
    P: Sequence<Item = T> + ?Sized,
    Q: Sequence<Item = T> + ?Sized,
    R: Materialize<Item = T>,
    T: Scalar,
{
    const {
        assert!(
            may_be_nonempty(P::CAPACITY) && may_be_nonempty(Q::CAPACITY),
            "polycompose: both input arguments must be non-empty"
        )
    };
    check!(
        !p.is_empty() && !q.is_empty(),
        "polycompose: both input arguments must be non-empty"
    );

    let one = constant::<1>();
    let r_bounds = (p.size_bounds() - one) * (q.size_bounds() - one) + one;
    let mut result: R = make_zeroed(&r_bounds);

    let p = p.as_slice();
    let q = q.as_slice();
    let out = result.as_mut_slice();

    // i = 0: p[0] * q^0
    out[0] = p[0];
    if p.len() == 1 {
        return result;
    }

    // i = 1: p[1] * q
    for (o, &c) in out.iter_mut().zip(q) {
        *o += p[1] * c;
    }
    if p.len() == 2 {
        return result;
    }

    let step = q.len() - 1;
    let mut q_pow: R = make_zeroed(&r_bounds);
    let mut scratch: R = make_uninit(&r_bounds);
    log::trace!(
        "polycompose: {} terms, power buffers of {} coefficients",
        p.len(),
        r_bounds.runtime_size()
    );

    // i >= 2: q^i = q^(i-1) * q, starting from q^1 = q
    q_pow.as_mut_slice()[..q.len()].copy_from_slice(q);
    let mut highest = step;
    for &coeff in &p[2..] {
        scratch.as_mut_slice()[..=highest].copy_from_slice(&q_pow.as_slice()[..=highest]);
        let next = highest + step;
        conv_into(
            &scratch.as_slice()[..=highest],
            q,
            &mut q_pow.as_mut_slice()[..=next],
        );
        highest = next;

        let out = result.as_mut_slice();
        for (o, &c) in out[..=highest].iter_mut().zip(&q_pow.as_slice()[..=highest]) {
            *o += coeff * c;
        }
    }
    result
}
