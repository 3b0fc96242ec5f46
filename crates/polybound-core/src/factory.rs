//! Container factory
//!
//! Materializes the container a size-bounds descriptor calls for:
//!
//! - compile-time size known → `[T; N]` with exactly that size
//! - compile-time capacity known → [`InlineVec<T, C>`](crate::InlineVec) with `C >= capacity`
//! - neither → `Vec<T>`
//!
//! Stable Rust cannot spell `[T; N + M - 1]` in a return type, so the concrete
//! container is named by the caller, usually through inference, and checked
//! against the descriptor at compile time. A mismatch is a build error, not a
//! runtime failure:
//!
//! ```rust
//! use polybound_core::bounds::{constant, static_bounds};
//! use polybound_core::factory::make_zeroed;
//!
//! let r: [i32; 4] = make_zeroed(&(static_bounds::<3>() + constant::<1>()));
//! assert_eq!(r, [0; 4]);
//! ```
//!
//! ```compile_fail
//! use polybound_core::bounds::static_bounds;
//! use polybound_core::factory::make_zeroed;
//!
//! // A dynamic vector for a statically sized result is rejected.
//! let r: Vec<i32> = make_zeroed(&static_bounds::<3>());
//! ```

use num_traits::Zero;

use crate::bounds::{Bounds, SizeExpr};
use crate::check;
use crate::extent::Extent;
use crate::sequence::{SequenceKind, SequenceMut};

/// An owned sequence that can be built with a given length
pub trait Materialize: SequenceMut + Sized {
    /// `len` copies of `value`
    fn filled(len: usize, value: Self::Item) -> Self;

    /// `len` elements the caller will overwrite before reading
    ///
    /// Safe Rust cannot hand out unread memory, so every implementation still
    /// default-constructs the elements. The constructor exists so call sites
    /// state that they do not rely on the initial values.
    fn uninit(len: usize) -> Self;
}

/// Whether a container with the given extents can hold a result described by
/// `capacity` and `size`
pub const fn accepts(
    container_capacity: Extent,
    container_size: Extent,
    capacity: Extent,
    size: Extent,
) -> bool {
    match size {
        Extent::Known(n) => n >= 0 && container_size.eq_known(Extent::Known(n)),
        Extent::Runtime => match capacity {
            Extent::Known(c) => match (container_capacity, container_size) {
                (Extent::Known(cc), Extent::Runtime) => cc >= c,
                _ => false,
            },
            Extent::Runtime => matches!(
                SequenceKind::classify(container_capacity, container_size),
                SequenceKind::Dynamic
            ),
        },
    }
}

/// `false` when the extent proves the sequence is always empty
pub const fn may_be_nonempty(capacity: Extent) -> bool {
    match capacity {
        Extent::Known(n) => n > 0,
        Extent::Runtime => true,
    }
}

/// Runtime length requested by a descriptor, which must not be negative
pub fn runtime_len<E: SizeExpr>(bounds: &Bounds<E>) -> usize {
    let n = bounds.runtime_size();
    check!(n >= 0, "size-bounds descriptor evaluated to negative size {}", n);
    n as usize
}

/// Container of the descriptor's kind and length, every element zero
pub fn make_zeroed<R, E>(bounds: &Bounds<E>) -> R
where
    R: Materialize,
    R::Item: Zero,
    E: SizeExpr,
{
    const {
        assert!(
            accepts(R::CAPACITY, R::SIZE, E::CAPACITY, E::SIZE),
            "container kind does not match the size-bounds descriptor"
        )
    };
    let len = runtime_len(bounds);
    log::trace!("materializing zeroed {} container of length {len}", R::KIND.name());
    R::filled(len, <R::Item as Zero>::zero())
}

/// Container of the descriptor's kind and length, contents unspecified
pub fn make_uninit<R, E>(bounds: &Bounds<E>) -> R
where
    R: Materialize,
    E: SizeExpr,
{
    const {
        assert!(
            accepts(R::CAPACITY, R::SIZE, E::CAPACITY, E::SIZE),
            "container kind does not match the size-bounds descriptor"
        )
    };
    let len = runtime_len(bounds);
    log::trace!("materializing {} container of length {len}", R::KIND.name());
    R::uninit(len)
}

impl<T: Clone + Default, const N: usize> Materialize for [T; N] {
    fn filled(len: usize, value: T) -> Self {
        check!(len == N, "array of {} elements cannot hold {}", N, len);
        std::array::from_fn(|_| value.clone())
    }

    fn uninit(len: usize) -> Self {
        check!(len == N, "array of {} elements cannot hold {}", N, len);
        std::array::from_fn(|_| T::default())
    }
}

impl<T: Clone + Default> Materialize for Vec<T> {
    fn filled(len: usize, value: T) -> Self {
        vec![value; len]
    }

    fn uninit(len: usize) -> Self {
        let mut v = Vec::with_capacity(len);
        v.resize_with(len, T::default);
        v
    }
}
