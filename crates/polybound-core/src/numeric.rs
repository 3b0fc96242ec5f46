//! Numeric capability required by the sequence algorithms
//!
//! The algorithms only need ring arithmetic, division for antiderivatives and
//! a zero to start accumulations from. Integer coefficients therefore divide
//! with truncation, exactly like the primitive `/` operator.

use num_traits::{Num, NumAssign};
use std::fmt::Debug;

/// Element type accepted by the polynomial, convolution and element-wise routines
///
/// Blanket-implemented for every type with the required arithmetic, which
/// includes all primitive integers and floats.
pub trait Scalar: Num + NumAssign + Copy + PartialOrd + Debug {}

impl<T> Scalar for T where T: Num + NumAssign + Copy + PartialOrd + Debug {}
