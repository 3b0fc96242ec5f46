//! Fixed-capacity vector stored inline
//!
//! [`InlineVec<T, N>`] keeps up to `N` elements in an inline buffer and a
//! runtime length. It is the *bounded* sequence kind: the capacity is part of
//! the type, the length is not.
//!
//! Only the `[0, len)` prefix of the buffer is initialized. Exceeding the
//! capacity, popping from an empty vector or indexing past the length are
//! contract violations reported through [`check!`](crate::check!). The
//! `try_*` variants report capacity problems as [`Error`] instead.
//!
//! ```rust
//! use polybound_core::InlineVec;
//!
//! let mut v: InlineVec<i32, 4> = InlineVec::new();
//! v.push(1);
//! v.extend_from_slice(&[2, 3]);
//! v.erase(0);
//! assert_eq!(v, [2, 3]);
//! assert!(v.try_extend_from_slice(&[4, 5, 6]).is_err());
//! ```

use std::borrow::{Borrow, BorrowMut};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::mem::{ManuallyDrop, MaybeUninit};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;
use std::slice::{self, SliceIndex};

use crate::bounds::{bounded_bounds, Bounds, BoundedBounds};
use crate::check;
use crate::error::{Error, Result};
use crate::factory::Materialize;
use crate::sequence::{Sequence, SequenceMut};

/// Tag selecting the constructors that do not promise initial values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Uninit;

/// A vector with inline storage for at most `N` elements
pub struct InlineVec<T, const N: usize> {
    len: usize,
    buf: [MaybeUninit<T>; N],
}

impl<T, const N: usize> InlineVec<T, N> {
    /// Maximum number of elements
    pub const CAPACITY: usize = N;

    /// Empty vector; no slot is touched
    pub const fn new() -> Self {
        Self {
            len: 0,
            buf: [const { MaybeUninit::uninit() }; N],
        }
    }

    /// Empty vector, spelled out for call sites that only overwrite
    pub const fn uninit(_: Uninit) -> Self {
        Self::new()
    }

    /// `n` copies of `value`
    pub fn with_len(n: usize, value: T) -> Self
    where
        T: Clone,
    {
        check!(n <= N, "length {} exceeds capacity {}", n, N);
        let mut v = Self::new();
        for _ in 0..n {
            // SAFETY: n <= N was checked above.
            unsafe { v.push_unchecked(value.clone()) };
        }
        v
    }

    /// `n` elements the caller will overwrite
    ///
    /// Elements are default-constructed since safe code may not observe
    /// uninitialized memory.
    pub fn with_len_uninit(n: usize, _: Uninit) -> Self
    where
        T: Default,
    {
        check!(n <= N, "length {} exceeds capacity {}", n, N);
        let mut v = Self::new();
        v.resize_with(n, T::default);
        v
    }

    /// Copy of `items`; they must fit
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        let mut v = Self::new();
        v.extend_from_slice(items);
        v
    }

    /// Copy of `items`, or an error when they do not fit
    pub fn try_from_slice(items: &[T]) -> Result<Self>
    where
        T: Clone,
    {
        let mut v = Self::new();
        v.try_extend_from_slice(items)?;
        Ok(v)
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    #[inline]
    pub const fn remaining_capacity(&self) -> usize {
        N - self.len
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().cast::<T>(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast::<T>(), self.len) }
    }

    pub fn front(&self) -> &T {
        check!(self.len > 0, "front() on an empty InlineVec");
        &self.as_slice()[0]
    }

    pub fn front_mut(&mut self) -> &mut T {
        check!(self.len > 0, "front_mut() on an empty InlineVec");
        &mut self.as_mut_slice()[0]
    }

    pub fn back(&self) -> &T {
        check!(self.len > 0, "back() on an empty InlineVec");
        &self.as_slice()[self.len - 1]
    }

    pub fn back_mut(&mut self) -> &mut T {
        check!(self.len > 0, "back_mut() on an empty InlineVec");
        let last = self.len - 1;
        &mut self.as_mut_slice()[last]
    }

    /// # Safety
    /// `self.len < N` must hold.
    #[inline]
    unsafe fn push_unchecked(&mut self, value: T) {
        self.buf.get_unchecked_mut(self.len).write(value);
        self.len += 1;
    }

    /// Append `value`; the vector must not be full
    pub fn push(&mut self, value: T) {
        check!(self.len < N, "push on a full InlineVec of capacity {}", N);
        // SAFETY: capacity checked above.
        unsafe { self.push_unchecked(value) };
    }

    /// Append `value`, or report that the vector is full
    ///
    /// On error `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<()> {
        if self.len >= N {
            return Err(Error::capacity_exceeded(N, self.len + 1));
        }
        // SAFETY: capacity checked above.
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    /// Remove and return the last element, if any
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was initialized and is no longer counted.
        Some(unsafe { self.buf.get_unchecked(self.len).assume_init_read() })
    }

    /// Remove and return the last element; the vector must not be empty
    pub fn pop_back(&mut self) -> T {
        check!(self.len > 0, "pop_back() on an empty InlineVec");
        match self.pop() {
            Some(value) => value,
            None => unreachable!(),
        }
    }

    /// Remove the element at `index`, shifting the tail left
    ///
    /// Keeps the order of the remaining elements; O(len).
    pub fn erase(&mut self, index: usize) -> T {
        check!(
            index < self.len,
            "erase index {} out of range for length {}",
            index,
            self.len
        );
        // SAFETY: index < len, so the read is of an initialized slot and the
        // copied range [index + 1, len) stays within the initialized prefix.
        unsafe {
            let base = self.buf.as_mut_ptr().cast::<T>();
            let removed = ptr::read(base.add(index));
            ptr::copy(base.add(index + 1), base.add(index), self.len - index - 1);
            self.len -= 1;
            removed
        }
    }

    /// Remove the element at `index`, moving the last element into its place
    pub fn swap_remove(&mut self, index: usize) -> T {
        check!(
            index < self.len,
            "swap_remove index {} out of range for length {}",
            index,
            self.len
        );
        let last = self.len - 1;
        self.as_mut_slice().swap(index, last);
        self.pop_back()
    }

    /// Insert `value` at `index`, shifting the tail right
    pub fn insert(&mut self, index: usize, value: T) {
        check!(
            index <= self.len,
            "insert index {} out of range for length {}",
            index,
            self.len
        );
        check!(self.len < N, "insert into a full InlineVec of capacity {}", N);
        // SAFETY: index <= len < N.
        unsafe { self.insert_unchecked(index, value) };
    }

    /// Insert `value` at `index`, or report that the vector is full
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<()> {
        check!(
            index <= self.len,
            "insert index {} out of range for length {}",
            index,
            self.len
        );
        if self.len >= N {
            return Err(Error::capacity_exceeded(N, self.len + 1));
        }
        // SAFETY: index <= len < N.
        unsafe { self.insert_unchecked(index, value) };
        Ok(())
    }

    /// # Safety
    /// `index <= self.len < N` must hold.
    unsafe fn insert_unchecked(&mut self, index: usize, value: T) {
        let base = self.buf.as_mut_ptr().cast::<T>();
        ptr::copy(base.add(index), base.add(index + 1), self.len - index);
        ptr::write(base.add(index), value);
        self.len += 1;
    }

    /// Shorten to `new_len`, dropping the removed elements
    ///
    /// Does nothing when `new_len >= len`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let old_len = self.len;
        // Shrink first so a panicking destructor cannot cause a double drop.
        self.len = new_len;
        // SAFETY: [new_len, old_len) was initialized and is no longer counted.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr().cast::<T>().add(new_len),
                old_len - new_len,
            );
            ptr::drop_in_place(tail);
        }
    }

    /// Remove every element
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Grow with copies of `value` or shrink to `new_len`
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        check!(new_len <= N, "resize to {} exceeds capacity {}", new_len, N);
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        while self.len < new_len {
            // SAFETY: len < new_len <= N.
            unsafe { self.push_unchecked(value.clone()) };
        }
    }

    /// Grow with values produced by `f` or shrink to `new_len`
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) {
        check!(new_len <= N, "resize to {} exceeds capacity {}", new_len, N);
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        while self.len < new_len {
            // SAFETY: len < new_len <= N.
            unsafe { self.push_unchecked(f()) };
        }
    }

    /// Like [`resize`](Self::resize), but reports oversize requests as errors
    pub fn try_resize(&mut self, new_len: usize, value: T) -> Result<()>
    where
        T: Clone,
    {
        if new_len > N {
            return Err(Error::capacity_exceeded(N, new_len));
        }
        self.resize(new_len, value);
        Ok(())
    }

    /// Append clones of `items`; they must fit
    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        check!(
            items.len() <= self.remaining_capacity(),
            "{} more elements exceed capacity {} at length {}",
            items.len(),
            N,
            self.len
        );
        for item in items {
            // SAFETY: capacity checked above.
            unsafe { self.push_unchecked(item.clone()) };
        }
    }

    /// Append clones of `items`, or leave the vector unchanged when they do not fit
    pub fn try_extend_from_slice(&mut self, items: &[T]) -> Result<()>
    where
        T: Clone,
    {
        if items.len() > self.remaining_capacity() {
            return Err(Error::capacity_exceeded(N, self.len + items.len()));
        }
        self.extend_from_slice(items);
        Ok(())
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T, const N: usize> Drop for InlineVec<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, const N: usize> Default for InlineVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for InlineVec<T, N> {
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice())
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for InlineVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, const N: usize> Deref for InlineVec<T, N> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> DerefMut for InlineVec<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> Index<I> for InlineVec<T, N> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &I::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> IndexMut<I> for InlineVec<T, N> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T, const N: usize> AsRef<[T]> for InlineVec<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> AsMut<[T]> for InlineVec<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> Borrow<[T]> for InlineVec<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> BorrowMut<[T]> for InlineVec<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Hash, const N: usize> Hash for InlineVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<InlineVec<U, M>> for InlineVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &InlineVec<U, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for InlineVec<T, N> {}

impl<T, U, const N: usize> PartialEq<[U]> for InlineVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, const N: usize> PartialEq<&[U]> for InlineVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<[U; M]> for InlineVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; M]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, const N: usize> PartialEq<Vec<U>> for InlineVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, const N: usize> FromIterator<T> for InlineVec<T, N> {
    /// Collects every item; more than `N` items is a contract violation
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<T, const N: usize> Extend<T> for InlineVec<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Clone + 'a, const N: usize> Extend<&'a T> for InlineVec<T, N> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item.clone());
        }
    }
}

impl<T, const N: usize, const M: usize> From<[T; M]> for InlineVec<T, N> {
    fn from(items: [T; M]) -> Self {
        const { assert!(M <= N, "array does not fit the InlineVec capacity") };
        items.into_iter().collect()
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for InlineVec<T, N> {
    type Error = Error;

    fn try_from(items: &[T]) -> Result<Self> {
        Self::try_from_slice(items)
    }
}

impl<T, const N: usize> From<InlineVec<T, N>> for Vec<T> {
    fn from(v: InlineVec<T, N>) -> Self {
        v.into_iter().collect()
    }
}

// =============================================================================
// Iteration
// =============================================================================

/// Owning iterator over the elements of an [`InlineVec`]
pub struct IntoIter<T, const N: usize> {
    buf: [MaybeUninit<T>; N],
    start: usize,
    end: usize,
}

impl<T, const N: usize> IntoIter<T, N> {
    /// Elements not yet yielded
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [start, end) is initialized and not yet yielded.
        unsafe {
            slice::from_raw_parts(
                self.buf.as_ptr().cast::<T>().add(self.start),
                self.end - self.start,
            )
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        let i = self.start;
        self.start += 1;
        // SAFETY: slot i is initialized and yielded exactly once.
        Some(unsafe { self.buf.get_unchecked(i).assume_init_read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.start;
        (n, Some(n))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: slot end is initialized and yielded exactly once.
        Some(unsafe { self.buf.get_unchecked(self.end).assume_init_read() })
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let remaining = self.end - self.start;
        let start = self.start;
        self.start = self.end;
        // SAFETY: the remaining slots are initialized and will not be read again.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr().cast::<T>().add(start),
                remaining,
            );
            ptr::drop_in_place(tail);
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, const N: usize> IntoIterator for InlineVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> IntoIter<T, N> {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so ownership of the initialized
        // prefix moves to the iterator.
        let buf = unsafe { ptr::read(&this.buf) };
        IntoIter {
            buf,
            start: 0,
            end: this.len,
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a InlineVec<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut InlineVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// =============================================================================
// Sequence traits
// =============================================================================

impl<T, const N: usize> Sequence for InlineVec<T, N> {
    type Item = T;
    type Bounds = BoundedBounds<N>;

    #[inline]
    fn as_slice(&self) -> &[T] {
        InlineVec::as_slice(self)
    }

    #[inline]
    fn size_bounds(&self) -> Bounds<BoundedBounds<N>> {
        bounded_bounds::<N>(self.len)
    }
}

impl<T: Clone, const N: usize> SequenceMut for InlineVec<T, N> {
    const RESIZABLE: bool = true;

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        InlineVec::as_mut_slice(self)
    }

    fn resize_to(&mut self, len: usize, value: T) {
        self.resize(len, value);
    }
}

impl<T: Clone + Default, const N: usize> Materialize for InlineVec<T, N> {
    fn filled(len: usize, value: T) -> Self {
        Self::with_len(len, value)
    }

    fn uninit(len: usize) -> Self {
        Self::with_len_uninit(len, Uninit)
    }
}

// =============================================================================
// Serde
// =============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::InlineVec;
    use crate::error::Error;
    use serde::de::{self, SeqAccess, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;
    use std::marker::PhantomData;

    impl<T: Serialize, const N: usize> Serialize for InlineVec<T, N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    struct InlineVecVisitor<T, const N: usize>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>, const N: usize> Visitor<'de> for InlineVecVisitor<T, N> {
        type Value = InlineVec<T, N>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a sequence of at most {N} elements")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut out = InlineVec::new();
            while let Some(item) = seq.next_element()? {
                if out.try_push(item).is_err() {
                    return Err(de::Error::custom(Error::capacity_exceeded(N, N + 1)));
                }
            }
            Ok(out)
        }
    }

    impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for InlineVec<T, N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_seq(InlineVecVisitor(PhantomData))
        }
    }
}
