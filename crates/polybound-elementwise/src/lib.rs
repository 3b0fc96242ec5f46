//! Element-wise operations over any sequence kind
//!
//! Binary operators, comparisons and folds for arrays, inline vectors,
//! vectors and slices. Results follow the operands' kind, so two arrays give
//! an array and anything involving a bounded operand stays on the stack.
//!
//! # Example
//!
//! ```rust
//! use polybound_elementwise::{add_assign, any_of, compare, sum, Cmp};
//!
//! let mut acc = [0.0; 3];
//! add_assign(&mut acc, &[1.0, 2.0, 3.0]);
//! add_assign(&mut acc, &[1.0, 2.0, 3.0]);
//! assert_eq!(sum(&acc), 12.0);
//!
//! let over: [bool; 3] = compare(&acc, &[1.0, 5.0, 5.0], Cmp::Gt);
//! assert!(any_of(&over));
//! ```

pub mod assign;
pub mod binary;
pub mod compare;
pub mod fold;

pub use assign::{add_assign, div_assign, map_assign, mul_assign, sub_assign, zip_assign};
pub use binary::{
    add, add_scalar, div, div_scalar, map_with, max_ew, min_ew, mul, mul_scalar, scalar_div, sub,
    sub_scalar, zip_bounds, zip_with,
};
pub use compare::{all_of, any_of, compare, compare_scalar, none_of, Cmp};
pub use fold::{fold_with, max, min, prod, sum, within_co};
