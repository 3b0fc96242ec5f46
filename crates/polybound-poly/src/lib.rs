//! Polynomial and convolution routines over any sequence kind
//!
//! Every routine accepts arrays, inline vectors, vectors and slices, and
//! returns the container kind the size of its result calls for. The result
//! type is named at the call site, typically by a binding, and is checked
//! against the inputs at compile time.
//!
//! # Example
//!
//! ```rust
//! use polybound_core::InlineVec;
//! use polybound_poly::{conv, polyder, polyval};
//!
//! // Static inputs give a static result
//! let r: [i32; 7] = conv(&[123, 234, 345, 456, 567], &[12, 23, 34]);
//! assert_eq!(r[0], 1476);
//!
//! // A bounded input gives a bounded result one element shorter
//! let p = InlineVec::<f64, 8>::from_slice(&[1.0, 2.0, 3.0]);
//! let d: InlineVec<f64, 7> = polyder(&p);
//! assert_eq!(polyval(&d, 1.0), 8.0);
//! ```

pub mod combinatorics;
pub mod compose;
pub mod conv;
pub mod polynomial;
pub mod taylor;
pub mod units;

pub use combinatorics::choose_one_from_each_group;
pub use compose::polycompose;
pub use conv::{conv, conv_into, conv_result_bounds, try_conv_into, ConvBounds};
pub use polynomial::{polyder, polyint, polyval};
pub use taylor::{diffcos, diffsin, difftan, taylor_cos, taylor_sin, taylor_tan};
pub use units::{db2mag, db2pow, deg2rad, mag2db, pow2db, rad2deg};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        choose_one_from_each_group, conv, conv_into, polycompose, polyder, polyint, polyval,
    };
}
