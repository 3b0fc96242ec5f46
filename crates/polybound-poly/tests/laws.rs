//! Algebraic laws of the polynomial routines, checked on random inputs

mod common;

use common::*;
use polybound_poly::{
    choose_one_from_each_group, conv, conv_into, polycompose, polyder, polyint, polyval,
};
use proptest::prelude::*;

fn small_coeffs(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(-20i64..=20, 1..=max_len)
}

proptest! {
    #[test]
    fn prop_conv_length(x in proptest::collection::vec(-50i64..50, 0..12),
                        y in proptest::collection::vec(-50i64..50, 0..12)) {
        let r: Vec<i64> = conv(&x, &y);
        let expected = if x.is_empty() || y.is_empty() { 0 } else { x.len() + y.len() - 1 };
        prop_assert_eq!(r.len(), expected);
    }

    #[test]
    fn prop_conv_into_matches_conv(x in small_coeffs(10), y in small_coeffs(10), stale in 0usize..30) {
        let r: Vec<i64> = conv(&x, &y);
        let mut out = vec![7i64; stale];
        conv_into(&x, &y, &mut out);
        prop_assert_eq!(&out, &r);

        let mut fixed = vec![-1i64; r.len()];
        conv_into(&x, &y, fixed.as_mut_slice());
        prop_assert_eq!(fixed, r);
    }

    #[test]
    fn prop_conv_is_product_of_values(x in small_coeffs(6), y in small_coeffs(6), a in -3i64..=3) {
        let r: Vec<i64> = conv(&x, &y);
        prop_assert_eq!(polyval(&r, a), polyval(&x, a) * polyval(&y, a));
    }

    #[test]
    fn prop_polyder_undoes_polyint(p in proptest::collection::vec(-1e3f64..1e3, 1..10), c0 in -10.0f64..10.0) {
        let integral: Vec<f64> = polyint(&p, c0);
        prop_assert_eq!(integral[0], c0);
        let back: Vec<f64> = polyder(&integral);
        prop_assert_eq!(back.len(), p.len());
        for (b, a) in back.iter().zip(&p) {
            prop_assert!((b - a).abs() <= EPSILON * a.abs().max(1.0));
        }
    }

    #[test]
    fn prop_polyder_shortens_by_one(p in small_coeffs(12)) {
        let d: Vec<i64> = polyder(&p);
        prop_assert_eq!(d.len() + 1, p.len());
    }

    #[test]
    fn prop_polycompose_commutes_with_polyval(p in small_coeffs(5), q in small_coeffs(4), a in -2i64..=2) {
        let r: Vec<i64> = polycompose(&p, &q);
        prop_assert_eq!(r.len(), (p.len() - 1) * (q.len() - 1) + 1);
        prop_assert_eq!(polyval(&r, a), polyval(&p, polyval(&q, a)));
    }

    #[test]
    fn prop_choose_visits_product(counts in proptest::collection::vec(1u32..4, 0..5)) {
        let mut visits = 0usize;
        let mut last: Option<Vec<u32>> = None;
        choose_one_from_each_group(&counts, |c| {
            if let Some(prev) = &last {
                assert!(prev.as_slice() < c);
            }
            last = Some(c.to_vec());
            visits += 1;
        });
        let expected = if counts.is_empty() { 0 } else { counts.iter().map(|&c| c as usize).product() };
        prop_assert_eq!(visits, expected);
    }
}

#[test]
fn test_polyint_zero_constant() {
    let r: [f64; 4] = polyint(&[1.0, 2.0, 3.0], 0.0);
    assert_relative_eq!(r[0], 0.0);
    assert_relative_eq!(r[3], 1.0);
}
