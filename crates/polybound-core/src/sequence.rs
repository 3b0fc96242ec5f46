//! Sequence kinds
//!
//! Every sequence the algorithms accept belongs to one of three kinds, decided
//! purely by its type:
//!
//! | Kind | Capacity | Size | Types |
//! |------|----------|------|-------|
//! | [`SequenceKind::Static`] | `N` | `N` | `[T; N]` |
//! | [`SequenceKind::Bounded`] | `N` | runtime | [`InlineVec<T, N>`](crate::InlineVec) |
//! | [`SequenceKind::Dynamic`] | runtime | runtime | `Vec<T>`, `[T]` |

use crate::bounds::{dynamic_bounds, static_bounds, Bounds, DynamicBounds, SizeExpr, StaticBounds};
use crate::check;
use crate::extent::Extent;

/// Capacity/size regime of a sequence type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceKind {
    /// Capacity and size fixed by the type and equal
    Static,
    /// Capacity fixed by the type, size stored in the value
    Bounded,
    /// Capacity and size both runtime values
    Dynamic,
}

impl SequenceKind {
    /// Classify a pair of compile-time extents
    pub const fn classify(capacity: Extent, size: Extent) -> Self {
        match (capacity, size) {
            (_, Extent::Known(_)) => SequenceKind::Static,
            (Extent::Known(_), Extent::Runtime) => SequenceKind::Bounded,
            (Extent::Runtime, Extent::Runtime) => SequenceKind::Dynamic,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            SequenceKind::Static => "static",
            SequenceKind::Bounded => "bounded",
            SequenceKind::Dynamic => "dynamic",
        }
    }
}

/// A contiguous, indexable sequence with a type-level size descriptor
pub trait Sequence {
    type Item;
    /// Type of the descriptor returned by [`size_bounds`](Sequence::size_bounds)
    type Bounds: SizeExpr;

    /// Compile-time capacity, available without a value
    const CAPACITY: Extent = <Self::Bounds as SizeExpr>::CAPACITY;
    /// Compile-time size, available without a value
    const SIZE: Extent = <Self::Bounds as SizeExpr>::SIZE;
    const KIND: SequenceKind = SequenceKind::classify(Self::CAPACITY, Self::SIZE);

    fn as_slice(&self) -> &[Self::Item];

    /// Descriptor carrying the type-level extents and the current length
    fn size_bounds(&self) -> Bounds<Self::Bounds>;

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A sequence whose elements can be written, and possibly resized
pub trait SequenceMut: Sequence {
    /// Whether [`resize_to`](SequenceMut::resize_to) may change the length
    const RESIZABLE: bool = false;

    fn as_mut_slice(&mut self) -> &mut [Self::Item];

    /// Set the length to `len`, filling new slots with `value`
    ///
    /// Fixed-length sequences only accept their current length.
    fn resize_to(&mut self, len: usize, _value: Self::Item) {
        check!(
            len == self.len(),
            "cannot resize a fixed-length sequence from {} to {}",
            self.len(),
            len
        );
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;
    type Bounds = StaticBounds<N>;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }

    #[inline]
    fn size_bounds(&self) -> Bounds<StaticBounds<N>> {
        static_bounds::<N>()
    }
}

impl<T, const N: usize> SequenceMut for [T; N] {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Sequence for [T] {
    type Item = T;
    type Bounds = DynamicBounds;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }

    #[inline]
    fn size_bounds(&self) -> Bounds<DynamicBounds> {
        dynamic_bounds(<[T]>::len(self))
    }
}

impl<T> SequenceMut for [T] {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;
    type Bounds = DynamicBounds;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }

    #[inline]
    fn size_bounds(&self) -> Bounds<DynamicBounds> {
        dynamic_bounds(Vec::len(self))
    }
}

impl<T: Clone> SequenceMut for Vec<T> {
    const RESIZABLE: bool = true;

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    fn resize_to(&mut self, len: usize, value: T) {
        Vec::resize(self, len, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Extent::{Known, Runtime};

    fn extents<S: Sequence + ?Sized>() -> (Extent, Extent, SequenceKind) {
        (S::CAPACITY, S::SIZE, S::KIND)
    }

    #[test]
    fn test_kinds_from_types() {
        assert_eq!(extents::<[i32; 4]>(), (Known(4), Known(4), SequenceKind::Static));
        assert_eq!(extents::<Vec<i32>>(), (Runtime, Runtime, SequenceKind::Dynamic));
        assert_eq!(extents::<[i32]>(), (Runtime, Runtime, SequenceKind::Dynamic));
    }

    #[test]
    fn test_runtime_sizes() {
        let a = [1, 2, 3];
        assert_eq!(Sequence::len(&a), 3);
        assert_eq!(a.size_bounds().runtime_size(), 3);

        let v = vec![1.0, 2.0];
        assert_eq!(v.size_bounds().runtime_size(), 2);

        let s: &[u8] = &[];
        assert!(Sequence::is_empty(s));
        assert_eq!(s.size_bounds().runtime_size(), 0);
    }

    #[test]
    fn test_vec_resizes() {
        let mut v = vec![1, 2, 3];
        v.resize_to(5, 0);
        assert_eq!(v, vec![1, 2, 3, 0, 0]);
        v.resize_to(1, 0);
        assert_eq!(v, vec![1]);
        assert!(<Vec<i32> as SequenceMut>::RESIZABLE);
    }

    #[test]
    fn test_fixed_length_resize_to_same_length() {
        let mut a = [1, 2];
        a.resize_to(2, 0);
        assert_eq!(a, [1, 2]);
        assert!(!<[i32; 2] as SequenceMut>::RESIZABLE);
    }

    #[test]
    #[should_panic(expected = "cannot resize a fixed-length sequence")]
    fn test_fixed_length_resize_rejects_other_length() {
        let mut a = [1, 2];
        a.resize_to(3, 0);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(SequenceKind::Static.name(), "static");
        assert_eq!(SequenceKind::classify(Known(3), Runtime), SequenceKind::Bounded);
        assert_eq!(SequenceKind::classify(Runtime, Runtime).name(), "dynamic");
    }
}
