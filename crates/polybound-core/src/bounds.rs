//! Size-bounds expressions
//!
//! A size-bounds descriptor tracks two things about a (possibly not yet
//! existing) sequence: its capacity and its size. Each has a compile-time side,
//! an [`Extent`] stored as an associated constant of the expression *type*, and
//! every expression also carries the actual runtime size as a value.
//!
//! Arithmetic on [`Bounds`] builds a new expression type whose constants are
//! computed from the operands' constants, so a routine like `conv` can derive
//! the descriptor of its result from the descriptors of its inputs:
//!
//! ```rust
//! use polybound_core::bounds::{self, constant, dynamic_bounds, static_bounds};
//! use polybound_core::Extent;
//!
//! let x = static_bounds::<5>();
//! let y = static_bounds::<3>();
//! let r = bounds::max(x + y - constant::<1>(), constant::<0>());
//! assert_eq!(r.size(), Extent::Known(7));
//! assert_eq!(r.runtime_size(), 7);
//!
//! // One runtime-sized operand makes the whole result runtime-sized.
//! let r = bounds::max(x + dynamic_bounds(3) - constant::<1>(), constant::<0>());
//! assert_eq!(r.size(), Extent::Runtime);
//! assert_eq!(r.runtime_size(), 7);
//! ```
//!
//! The compile-time side decides which container kind a routine returns, the
//! runtime side decides how many elements it holds.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Mul, Neg, Sub};

use crate::check;
use crate::extent::Extent;
use crate::sequence::SequenceKind;

/// A node of a size-bounds expression
pub trait SizeExpr: Copy {
    /// Compile-time capacity of the described sequence
    const CAPACITY: Extent;
    /// Compile-time size of the described sequence
    const SIZE: Extent;

    /// Actual size, always available
    fn runtime_size(&self) -> i32;
}

/// Convert a length to the signed representation used by the algebra
#[inline]
pub fn len_to_i32(len: usize) -> i32 {
    check!(
        len <= i32::MAX as usize,
        "length {} does not fit the size-bounds representation",
        len
    );
    len as i32
}

/// Unwrap a checked runtime size, treating overflow as a contract violation
#[inline]
fn checked(value: Option<i32>) -> i32 {
    check!(value.is_some(), "size-bounds arithmetic overflows i32");
    value.unwrap_or(0)
}

// =============================================================================
// Leaves
// =============================================================================

/// Descriptor of a sequence whose capacity and size are both `N`
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticBounds<const N: usize>;

impl<const N: usize> SizeExpr for StaticBounds<N> {
    const CAPACITY: Extent = Extent::of(N);
    const SIZE: Extent = Extent::of(N);

    #[inline]
    fn runtime_size(&self) -> i32 {
        N as i32
    }
}

/// Descriptor of a sequence with capacity `N` and a runtime size
#[derive(Debug, Clone, Copy)]
pub struct BoundedBounds<const N: usize> {
    size: i32,
}

impl<const N: usize> SizeExpr for BoundedBounds<N> {
    const CAPACITY: Extent = Extent::of(N);
    const SIZE: Extent = Extent::Runtime;

    #[inline]
    fn runtime_size(&self) -> i32 {
        self.size
    }
}

/// Descriptor of a sequence with runtime capacity and size
#[derive(Debug, Clone, Copy)]
pub struct DynamicBounds {
    size: i32,
}

impl SizeExpr for DynamicBounds {
    const CAPACITY: Extent = Extent::Runtime;
    const SIZE: Extent = Extent::Runtime;

    #[inline]
    fn runtime_size(&self) -> i32 {
        self.size
    }
}

/// A compile-time integer, usable as capacity and size alike
#[derive(Debug, Clone, Copy, Default)]
pub struct Constant<const V: i32>;

impl<const V: i32> SizeExpr for Constant<V> {
    const CAPACITY: Extent = Extent::Known(V);
    const SIZE: Extent = Extent::Known(V);

    #[inline]
    fn runtime_size(&self) -> i32 {
        V
    }
}

// =============================================================================
// Operators
// =============================================================================

macro_rules! binary_node {
    ($(#[$doc:meta])* $name:ident, $cap:ident, $size:ident, |$a:ident, $b:ident| $runtime:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<X, Y> {
            size: i32,
            _operands: PhantomData<(X, Y)>,
        }

        impl<X: SizeExpr, Y: SizeExpr> $name<X, Y> {
            fn new(x: &X, y: &Y) -> Self {
                let $a = x.runtime_size();
                let $b = y.runtime_size();
                Self {
                    size: $runtime,
                    _operands: PhantomData,
                }
            }
        }

        impl<X: SizeExpr, Y: SizeExpr> SizeExpr for $name<X, Y> {
            const CAPACITY: Extent = X::CAPACITY.$cap(Y::CAPACITY);
            const SIZE: Extent = X::SIZE.$size(Y::SIZE);

            #[inline]
            fn runtime_size(&self) -> i32 {
                self.size
            }
        }
    };
}

binary_node!(
    /// `x + y`
    SumOf, add, add, |a, b| checked(a.checked_add(b))
);
binary_node!(
    /// `x * y`
    ProductOf, mul, mul, |a, b| checked(a.checked_mul(b))
);
binary_node!(
    /// `min(x, y)`; the capacity is a conservative upper bound
    MinOf, min_capacity, min, |a, b| a.min(b)
);
binary_node!(
    /// `max(x, y)`
    MaxOf, max, max, |a, b| a.max(b)
);

/// `-x`
#[derive(Debug, Clone, Copy)]
pub struct NegOf<X> {
    size: i32,
    _operand: PhantomData<X>,
}

impl<X: SizeExpr> SizeExpr for NegOf<X> {
    const CAPACITY: Extent = X::CAPACITY.neg();
    const SIZE: Extent = X::SIZE.neg();

    #[inline]
    fn runtime_size(&self) -> i32 {
        self.size
    }
}

// =============================================================================
// Expression wrapper
// =============================================================================

/// A size-bounds descriptor
///
/// Wraps an expression node so the arithmetic operators can be implemented
/// once for every node type.
#[derive(Clone, Copy)]
pub struct Bounds<E>(E);

impl<E: SizeExpr> Bounds<E> {
    /// Compile-time capacity of the described sequence
    pub const CAPACITY: Extent = E::CAPACITY;
    /// Compile-time size of the described sequence
    pub const SIZE: Extent = E::SIZE;

    pub fn new(expr: E) -> Self {
        Self(expr)
    }

    pub fn expr(&self) -> &E {
        &self.0
    }

    pub fn capacity(&self) -> Extent {
        E::CAPACITY
    }

    pub fn size(&self) -> Extent {
        E::SIZE
    }

    /// Container kind the descriptor selects
    pub fn kind(&self) -> SequenceKind {
        SequenceKind::classify(E::CAPACITY, E::SIZE)
    }

    pub fn runtime_size(&self) -> i32 {
        self.0.runtime_size()
    }

    pub fn min<F: SizeExpr>(self, other: Bounds<F>) -> Bounds<MinOf<E, F>> {
        Bounds(MinOf::new(&self.0, &other.0))
    }

    pub fn max<F: SizeExpr>(self, other: Bounds<F>) -> Bounds<MaxOf<E, F>> {
        Bounds(MaxOf::new(&self.0, &other.0))
    }
}

impl<E: SizeExpr> fmt::Debug for Bounds<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bounds")
            .field("capacity", &E::CAPACITY)
            .field("size", &E::SIZE)
            .field("runtime_size", &self.runtime_size())
            .finish()
    }
}

impl<X: SizeExpr, Y: SizeExpr> Add<Bounds<Y>> for Bounds<X> {
    type Output = Bounds<SumOf<X, Y>>;

    fn add(self, rhs: Bounds<Y>) -> Self::Output {
        Bounds(SumOf::new(&self.0, &rhs.0))
    }
}

impl<X: SizeExpr, Y: SizeExpr> Sub<Bounds<Y>> for Bounds<X> {
    type Output = Bounds<SumOf<X, NegOf<Y>>>;

    fn sub(self, rhs: Bounds<Y>) -> Self::Output {
        self + (-rhs)
    }
}

impl<X: SizeExpr, Y: SizeExpr> Mul<Bounds<Y>> for Bounds<X> {
    type Output = Bounds<ProductOf<X, Y>>;

    fn mul(self, rhs: Bounds<Y>) -> Self::Output {
        Bounds(ProductOf::new(&self.0, &rhs.0))
    }
}

impl<X: SizeExpr> Neg for Bounds<X> {
    type Output = Bounds<NegOf<X>>;

    fn neg(self) -> Self::Output {
        Bounds(NegOf {
            size: -self.0.runtime_size(),
            _operand: PhantomData,
        })
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// Descriptor of an `N`-element array
pub fn static_bounds<const N: usize>() -> Bounds<StaticBounds<N>> {
    Bounds(StaticBounds)
}

/// Descriptor of a capacity-`N` sequence currently holding `len` elements
pub fn bounded_bounds<const N: usize>(len: usize) -> Bounds<BoundedBounds<N>> {
    check!(len <= N, "size {} exceeds capacity {}", len, N);
    Bounds(BoundedBounds {
        size: len_to_i32(len),
    })
}

/// Descriptor of a heap sequence currently holding `len` elements
pub fn dynamic_bounds(len: usize) -> Bounds<DynamicBounds> {
    Bounds(DynamicBounds {
        size: len_to_i32(len),
    })
}

/// Descriptor of the compile-time integer `V`
pub fn constant<const V: i32>() -> Bounds<Constant<V>> {
    Bounds(Constant)
}

/// `min(x, y)`
pub fn min<X: SizeExpr, Y: SizeExpr>(x: Bounds<X>, y: Bounds<Y>) -> Bounds<MinOf<X, Y>> {
    x.min(y)
}

/// `max(x, y)`
pub fn max<X: SizeExpr, Y: SizeExpr>(x: Bounds<X>, y: Bounds<Y>) -> Bounds<MaxOf<X, Y>> {
    x.max(y)
}
