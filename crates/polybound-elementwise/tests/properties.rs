//! Element-wise results agree with straightforward iterator code

mod common;

use common::paired_ints;
use polybound_core::InlineVec;
use polybound_elementwise::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_add_sub_round_trip((x, y) in paired_ints(16)) {
        let s: Vec<i64> = add(&x, &y);
        let back: Vec<i64> = sub(&s, &y);
        prop_assert_eq!(back, x);
    }

    #[test]
    fn prop_assign_matches_pure((x, y) in paired_ints(16)) {
        let pure: Vec<i64> = mul(&x, &y);
        let mut inplace = x.clone();
        mul_assign(&mut inplace, &y);
        prop_assert_eq!(inplace, pure);
    }

    #[test]
    fn prop_min_max_partition((x, y) in paired_ints(16)) {
        let lo: Vec<i64> = min_ew(&x, &y);
        let hi: Vec<i64> = max_ew(&x, &y);
        let total: Vec<i64> = add(&lo, &hi);
        let expected: Vec<i64> = add(&x, &y);
        prop_assert_eq!(total, expected);
        let le: Vec<bool> = compare(&lo, &hi, Cmp::Le);
        prop_assert!(all_of(&le));
    }

    #[test]
    fn prop_folds_match_iterators(x in proptest::collection::vec(-100i64..100, 1..12)) {
        prop_assert_eq!(sum(&x), x.iter().sum::<i64>());
        prop_assert_eq!(min(&x), *x.iter().min().unwrap());
        prop_assert_eq!(max(&x), *x.iter().max().unwrap());
    }

    #[test]
    fn prop_compare_scalar_counts(x in proptest::collection::vec(-10i32..10, 0..8), s in -10i32..10) {
        let iv = InlineVec::<i32, 8>::from_slice(&x);
        let lt: InlineVec<bool, 8> = compare_scalar(&iv, s, Cmp::Lt);
        let ge: InlineVec<bool, 8> = compare_scalar(&iv, s, Cmp::Ge);
        let count = |m: &InlineVec<bool, 8>| m.iter().filter(|&&b| b).count();
        prop_assert_eq!(count(&lt) + count(&ge), x.len());
        prop_assert_eq!(none_of(&lt), !any_of(&lt));
    }
}
