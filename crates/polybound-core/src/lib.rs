//! Core types for size-polymorphic sequence algorithms
//!
//! Algorithms in the sibling crates accept any sequence and return the
//! container kind their result's size calls for. This crate provides the
//! machinery that makes that decision at compile time.
//!
//! # Architecture Overview
//!
//! 1. **Sequence kinds** - [`Sequence`] classifies `[T; N]`, [`InlineVec`] and
//!    `Vec<T>` by their compile-time capacity and size
//! 2. **Size bounds** - [`Bounds`] expressions derive a result's capacity and
//!    size from its inputs' descriptors
//! 3. **Factory** - [`make_zeroed`] and [`make_uninit`] materialize the
//!    container a descriptor selects
//!
//! Contract violations are reported through [`check!`] and never returned as
//! errors. [`Error`] covers the fallible `try_*` entry points.
//!
//! # Example
//!
//! ```rust
//! use polybound_core::{bounds::{constant, static_bounds}, make_zeroed, InlineVec, Sequence};
//!
//! let input = InlineVec::<f64, 8>::from_slice(&[1.0, 2.0, 3.0]);
//! let out: InlineVec<f64, 9> = make_zeroed(&(input.size_bounds() + constant::<1>()));
//! assert_eq!(out.len(), 4);
//!
//! let fixed: [f64; 2] = make_zeroed(&(static_bounds::<3>() - constant::<1>()));
//! assert_eq!(fixed, [0.0, 0.0]);
//! ```

pub mod bounds;
pub mod check;
pub mod error;
pub mod extent;
pub mod factory;
pub mod inline_vec;
pub mod numeric;
pub mod sequence;

// Re-export core types
pub use error::{Error, Result};

pub use bounds::{Bounds, SizeExpr};
pub use check::{check_failed_policy, set_check_failed_policy, CheckFailedPolicy};
pub use extent::Extent;
pub use factory::{make_uninit, make_zeroed, Materialize};
pub use inline_vec::{InlineVec, Uninit};
pub use numeric::Scalar;
pub use sequence::{Sequence, SequenceKind, SequenceMut};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bounds::{bounded_bounds, constant, dynamic_bounds, static_bounds};
    pub use crate::{
        check, make_uninit, make_zeroed, Bounds, Extent, InlineVec, Materialize, Result, Scalar,
        Sequence, SequenceKind, SequenceMut, SizeExpr, Uninit,
    };

    pub use crate::error::Error;
}
