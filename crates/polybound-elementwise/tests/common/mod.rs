//! Shared utilities for integration tests

#![allow(dead_code)]

use proptest::prelude::*;

/// Two equal-length vectors of small integers
pub fn paired_ints(max_len: usize) -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
    (1..=max_len).prop_flat_map(|n| {
        (
            proptest::collection::vec(-1000i64..1000, n),
            proptest::collection::vec(-1000i64..1000, n),
        )
    })
}
