//! Size-polymorphic polynomial and sequence routines
//!
//! This crate re-exports the workspace members:
//!
//! - [`polybound_core`]: sequence kinds, the size-bounds algebra, the container
//!   factory and the fixed-capacity [`InlineVec`]
//! - [`polybound_poly`]: polynomial evaluation and calculus, convolution,
//!   composition, combinatorial enumeration, Taylor polynomials and unit
//!   conversions
//! - [`polybound_elementwise`]: element-wise operators, comparisons and folds
//!
//! # Example
//!
//! ```rust
//! use polybound::prelude::*;
//!
//! let p = [1.0, -3.0, 2.0];
//! let q = InlineVec::<f64, 4>::from_slice(&[0.0, 1.0]);
//!
//! let d: [f64; 2] = polyder(&p);
//! // capacity (3 - 1) * (4 - 1) + 1
//! let c: InlineVec<f64, 7> = polycompose(&p, &q);
//! assert_eq!(polyval(&c, 2.0), polyval(&p, 2.0));
//! assert_eq!(d, [-3.0, 4.0]);
//! ```

pub use polybound_core;
pub use polybound_elementwise;
pub use polybound_poly;

pub use polybound_core::{
    check, make_uninit, make_zeroed, Bounds, CheckFailedPolicy, Error, Extent, InlineVec,
    Materialize, Result, Scalar, Sequence, SequenceKind, SequenceMut, SizeExpr, Uninit,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use polybound_core::prelude::*;
    pub use polybound_elementwise::{compare, compare_scalar, map_with, zip_with, Cmp};
    pub use polybound_poly::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_covers_the_common_path() {
        let x = InlineVec::<i32, 5>::from_slice(&[123, 234, 345, 456, 567]);
        let y = [12, 23, 34];
        let r: InlineVec<i32, 7> = conv(&x, &y);
        assert_eq!(r, [1476, 5637, 13704, 21363, 29022, 28545, 19278]);

        let mask: InlineVec<bool, 7> = compare_scalar(&r, 20_000, Cmp::Gt);
        assert_eq!(mask.iter().filter(|&&b| b).count(), 3);

        let b = dynamic_bounds(4) + static_bounds::<2>();
        assert_eq!(b.kind(), SequenceKind::Dynamic);
        assert_eq!(b.runtime_size(), 6);
    }

    #[test]
    fn test_member_crates_are_reachable() {
        assert_eq!(crate::polybound_elementwise::sum(&[1, 2, 3]), 6);
        assert_eq!(crate::polybound_poly::polyval(&[1, 1], 2), 3);
    }

    #[test]
    #[should_panic(expected = "CHECK failed")]
    fn test_contract_violation_panics_by_default() {
        assert_eq!(
            crate::polybound_core::check_failed_policy(),
            crate::CheckFailedPolicy::Panic
        );
        let _: Vec<i32> = polyder(&Vec::<i32>::new());
    }
}
