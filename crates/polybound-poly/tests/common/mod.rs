//! Shared fixtures for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

pub const EPSILON: f64 = 1e-9;

/// Coefficients used by the derivative scenario, constant term first
pub const POLYDER_X: [i32; 4] = [456, 345, 234, 123];
pub const POLYDER_EXPECTED: [i32; 3] = [345, 468, 369];

/// Coefficients used by the antiderivative scenario
pub const POLYINT_X: [i32; 3] = [345, 234, 123];
pub const POLYINT_C0: i32 = 456;
pub const POLYINT_EXPECTED: [i32; 4] = [456, 345, 117, 41];

/// Operands and product used by the convolution scenario
pub const CONV_X: [i32; 5] = [123, 234, 345, 456, 567];
pub const CONV_Y: [i32; 3] = [12, 23, 34];
pub const CONV_EXPECTED: [i32; 7] = [1476, 5637, 13704, 21363, 29022, 28545, 19278];

/// Compare any sequence against the expected coefficients
pub fn assert_coeffs<S: polybound_core::Sequence<Item = i32> + ?Sized>(actual: &S, expected: &[i32]) {
    assert_eq!(actual.as_slice(), expected);
}
