//! # DigitStorage
//! A sequence of unsigned machine words that keeps up to `N` elements inline and
//! moves to a reference-counted heap buffer past that. Clones of a heap-backed
//! storage share the buffer; the first write through any of them detaches it
//! (copy-on-write).
//!
//! ```
//! use big_integer::DigitStorage;
//!
//! let mut a: DigitStorage<u64, 2> = [1, 2, 3].iter().copied().collect();
//! let b = a.clone();
//! assert!(a.shares_buffer_with(&b));
//!
//! a[0] = 7;
//! assert_eq!(a.as_slice(), &[7, 2, 3]);
//! assert_eq!(b.as_slice(), &[1, 2, 3]);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, Index, IndexMut};
use std::slice::{self, SliceIndex};
use std::sync::Arc;

use log::trace;
use num_traits::{PrimInt, Unsigned};

#[derive(Clone)]
enum Repr<T, const N: usize> {
    Inline { len: usize, buf: [T; N] },
    Shared(Arc<Vec<T>>),
}

#[derive(Clone)]
pub struct DigitStorage<T, const N: usize> {
    repr: Repr<T, N>,
}

/// Clones the buffer behind `heap` if anyone else holds it.
#[inline]
fn make_unique<T: Clone>(heap: &mut Arc<Vec<T>>) -> &mut Vec<T> {
    if Arc::strong_count(heap) > 1 {
        trace!(target: "digit_storage", "detaching shared buffer of {} elements", heap.len());
    }
    Arc::make_mut(heap)
}

impl<T: PrimInt + Unsigned, const N: usize> DigitStorage<T, N> {
    pub const INLINE_CAPACITY: usize = N;

    pub fn new() -> Self {
        DigitStorage { repr: Repr::Inline { len: 0, buf: [T::zero(); N] } }
    }

    /// `len` copies of `value`.
    pub fn from_elem(len: usize, value: T) -> Self {
        if len <= N {
            let mut buf = [T::zero(); N];
            buf[..len].fill(value);
            DigitStorage { repr: Repr::Inline { len, buf } }
        } else {
            DigitStorage { repr: Repr::Shared(Arc::new(vec![value; len])) }
        }
    }

    pub fn from_slice(values: &[T]) -> Self {
        if values.len() <= N {
            let mut buf = [T::zero(); N];
            buf[..values.len()].copy_from_slice(values);
            DigitStorage { repr: Repr::Inline { len: values.len(), buf } }
        } else {
            DigitStorage { repr: Repr::Shared(Arc::new(values.to_vec())) }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Inline { len, .. } => *len,
            Repr::Shared(heap) => heap.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_inline(&self) -> bool {
        matches!(self.repr, Repr::Inline { .. })
    }

    pub fn is_shared(&self) -> bool {
        !self.is_inline()
    }

    /// Whether both storages currently point at the same heap buffer.
    pub fn shares_buffer_with(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Shared(a), Repr::Shared(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match &self.repr {
            Repr::Inline { len, buf } => &buf[..*len],
            Repr::Shared(heap) => heap.as_slice(),
        }
    }

    /// Mutable view of the elements. Detaches a shared buffer first.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match &mut self.repr {
            Repr::Inline { len, buf } => &mut buf[..*len],
            Repr::Shared(heap) => make_unique(heap).as_mut_slice(),
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    pub fn push(&mut self, value: T) {
        if let Repr::Inline { len, buf } = &mut self.repr {
            if *len < N {
                buf[*len] = value;
                *len += 1;
                return;
            }
        }
        let len = self.len();
        self.promote(len + 1).push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        match &mut self.repr {
            Repr::Inline { len, buf } => {
                if *len == 0 {
                    None
                } else {
                    *len -= 1;
                    Some(buf[*len])
                }
            }
            Repr::Shared(heap) => make_unique(heap).pop(),
        }
    }

    /// Grows with zeros or truncates to `new_len`.
    pub fn resize(&mut self, new_len: usize) {
        if let Repr::Inline { len, buf } = &mut self.repr {
            if new_len <= N {
                if new_len > *len {
                    buf[*len..new_len].fill(T::zero());
                }
                *len = new_len;
                return;
            }
        }
        self.promote(new_len).resize(new_len, T::zero());
    }

    /// Moves inline elements to the heap if needed and returns the uniquely
    /// owned heap buffer.
    fn promote(&mut self, capacity: usize) -> &mut Vec<T> {
        if let Repr::Inline { len, buf } = self.repr {
            let mut heap = Vec::with_capacity(capacity.max(len));
            heap.extend_from_slice(&buf[..len]);
            trace!(target: "digit_storage", "promoting {} inline elements to the heap", len);
            self.repr = Repr::Shared(Arc::new(heap));
        }
        match &mut self.repr {
            Repr::Shared(heap) => make_unique(heap),
            Repr::Inline { .. } => unreachable!("promoted storage must be heap backed"),
        }
    }
}

impl<T: PrimInt + Unsigned, const N: usize> Default for DigitStorage<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimInt + Unsigned, const N: usize> Deref for DigitStorage<T, N> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, I, const N: usize> Index<I> for DigitStorage<T, N>
where
    T: PrimInt + Unsigned,
    I: SliceIndex<[T]>,
{
    type Output = I::Output;

    fn index(&self, index: I) -> &I::Output {
        &self.as_slice()[index]
    }
}

impl<T, I, const N: usize> IndexMut<I> for DigitStorage<T, N>
where
    T: PrimInt + Unsigned,
    I: SliceIndex<[T]>,
{
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: PrimInt + Unsigned, const N: usize> Extend<T> for DigitStorage<T, N> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: PrimInt + Unsigned, const N: usize> FromIterator<T> for DigitStorage<T, N> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut storage = Self::new();
        storage.extend(iter);
        storage
    }
}

impl<'a, T: PrimInt + Unsigned, const N: usize> IntoIterator for &'a DigitStorage<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PrimInt + Unsigned, const N: usize> PartialEq for DigitStorage<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PrimInt + Unsigned, const N: usize> Eq for DigitStorage<T, N> {}

impl<T: PrimInt + Unsigned + Hash, const N: usize> Hash for DigitStorage<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: PrimInt + Unsigned + fmt::Debug, const N: usize> fmt::Debug for DigitStorage<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Storage = DigitStorage<u64, 2>;

    #[test]
    fn test_push_promotes_past_inline_capacity() {
        let mut s = Storage::new();
        assert!(s.is_empty());
        s.push(1);
        s.push(2);
        assert!(s.is_inline());
        s.push(3);
        assert!(s.is_shared());
        assert_eq!(s.as_slice(), &[1, 2, 3]);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_never_demotes() {
        let mut s = Storage::from_elem(5, 9);
        assert!(s.is_shared());
        s.resize(1);
        assert!(s.is_shared());
        assert_eq!(s.pop(), Some(9));
        assert_eq!(s.pop(), None);
        assert!(s.is_shared());
    }

    #[test]
    fn test_inline_clone_is_independent() {
        let mut a = Storage::from_slice(&[4, 5]);
        let b = a.clone();
        a[1] = 6;
        assert_eq!(a.as_slice(), &[4, 6]);
        assert_eq!(b.as_slice(), &[4, 5]);
        assert!(!a.shares_buffer_with(&b));
    }

    #[test]
    fn test_copy_on_write() {
        let a = Storage::from_slice(&[1, 2, 3, 4]);
        let mut b = a.clone();
        assert!(a.shares_buffer_with(&b));

        b.push(5);
        assert!(!a.shares_buffer_with(&b));
        assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(b.as_slice(), &[1, 2, 3, 4, 5]);

        let mut c = a.clone();
        *c.last_mut().unwrap() = 0;
        assert_eq!(a.last(), Some(&4));
        assert_eq!(c.last(), Some(&0));

        let mut d = a.clone();
        d.pop();
        assert_eq!(a.len(), 4);
        assert_eq!(d.len(), 3);

        let mut e = a.clone();
        e.resize(6);
        assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(e.as_slice(), &[1, 2, 3, 4, 0, 0]);
    }

    #[test]
    fn test_reads_do_not_detach() {
        let a = Storage::from_slice(&[1, 2, 3]);
        let b = a.clone();
        assert_eq!(b[0], 1);
        assert_eq!(b.iter().sum::<u64>(), 6);
        assert_eq!(b.first(), Some(&1));
        assert!(a.shares_buffer_with(&b));
    }

    #[test]
    fn test_unique_write_keeps_buffer() {
        let mut a = Storage::from_slice(&[1, 2, 3]);
        let before = a.as_slice().as_ptr();
        a.as_mut_slice()[2] = 10;
        assert_eq!(a.as_slice().as_ptr(), before);
        assert_eq!(a.as_slice(), &[1, 2, 10]);
    }

    #[test]
    fn test_resize_pads_with_zero() {
        let mut s = Storage::from_slice(&[7, 8]);
        s.resize(1);
        s.resize(2);
        assert_eq!(s.as_slice(), &[7, 0]);
        assert!(s.is_inline());
        s.resize(3);
        assert_eq!(s.as_slice(), &[7, 0, 0]);
        assert!(s.is_shared());
    }

    #[test]
    fn test_collect_and_compare() {
        let s: DigitStorage<u32, 4> = (1..=6).collect();
        assert_eq!(s.len(), 6);
        assert_eq!(s, DigitStorage::from_slice(&[1, 2, 3, 4, 5, 6]));
        assert_eq!(format!("{:?}", s), "[1, 2, 3, 4, 5, 6]");
        assert_eq!(DigitStorage::<u8, 4>::INLINE_CAPACITY, 4);
    }
}
