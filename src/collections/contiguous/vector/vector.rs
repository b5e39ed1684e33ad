use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use tracing::trace;

use crate::iter::{Cursor, Iterable};
use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// The capacity allocated by the first growth of an empty Vector.
pub const DEFAULT_CAP: usize = 32;

const MAX_CAP: usize = isize::MAX as usize;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection.
///
/// Positions within a Vector are plain indices, so a [`Cursor`] over one never dangles when the
/// Vector reallocates: the borrow held by the Cursor prevents reallocation altogether.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `clear` | `O(n)` |
/// | `sort` | `O(n log n)`*** |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
///
/// \*** Quicksort with a middle pivot, `O(n^2)` in the worst case.
pub struct Vector<T> {
    pub(crate) buf: Box<[MaybeUninit<T>]>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use lazy_collections::collections::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub fn new() -> Vector<T> {
        Vector::with_cap(0)
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use lazy_collections::collections::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector::<T>::check_cap(cap).throw();
        Vector {
            buf: Box::new_uninit_slice(cap),
            len: 0,
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. The capacity is exactly the value provided to
    /// any of the capacity manipulation functions.
    pub fn cap(&self) -> usize {
        self.buf.len()
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use lazy_collections::collections::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        self.buf[self.len] = MaybeUninit::new(value);
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;

        // SAFETY: The value at the old last index is initialized, and len has already been
        // decremented so it will never be read again.
        Some(unsafe { self.buf[self.len].assume_init_read() })
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary.
    /// Inserting at `len` is equivalent to [`push`](Vector::push).
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use lazy_collections::collections::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(5, 300);
    /// assert_eq!(&*vec, &[0, 200, 100, 1, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at the given index, returning an [`Err`] rather than panicking
    /// if the index is out of bounds or the Vector can't grow.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrCapOverflow> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len }.into());
        }

        if self.len == self.cap() {
            self.try_grow()?;
        }

        self.buf[self.len] = MaybeUninit::new(value);
        // Rotating MaybeUninit values only moves bits, nothing is read or dropped.
        self.buf[index..=self.len].rotate_right(1);
        self.len += 1;
        Ok(())
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided index, returning an [`Err`] rather than panicking if
    /// the index is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        self.buf[index..self.len].rotate_left(1);
        self.len -= 1;

        // SAFETY: The removed value was rotated to the old last index, which is initialized and
        // now beyond len.
        Ok(unsafe { self.buf[self.len].assume_init_read() })
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.check_index(index).throw();

        let old = mem::replace(&mut self.buf[index], MaybeUninit::new(new_value));
        // SAFETY: index is < len and all values < len are initialized.
        unsafe { old.assume_init() }
    }

    /// Returns a reference to the element at `index`, or an [`Err`] if it is out of bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&self[index])
    }

    /// Returns a mutable reference to the element at `index`, or an [`Err`] if it is out of
    /// bounds.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut self[index])
    }

    /// Ensures that the Vector has capacity to hold an additional `extra` elements. After invoking
    /// this method, the capacity will be >= len + extra.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();

        if new_cap <= self.cap() { return; }

        self.realloc_with_cap(new_cap).throw();
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    pub fn shrink_to_fit(&mut self) {
        self.realloc_with_cap(self.len).throw();
    }

    /// Drops every element of the Vector, keeping its capacity.
    pub fn clear(&mut self) {
        let len = mem::replace(&mut self.len, 0);

        // SAFETY: The first len values are initialized, and len has already been reset so they
        // can't be observed again if a destructor panics.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr().cast::<T>(),
                len,
            ));
        }
    }

    /// Creates a Cursor pointing at the first element of the Vector.
    pub fn cursor_front(&self) -> Cursor<&Vector<T>> {
        Iterable::cursor_front(self)
    }

    /// Creates a Cursor pointing at the last element of the Vector.
    pub fn cursor_back(&self) -> Cursor<&Vector<T>> {
        Iterable::cursor_back(self)
    }

    /// Creates a Cursor pointing at the 'ghost' position before the first element.
    pub fn cursor_head(&self) -> Cursor<&Vector<T>> {
        Iterable::cursor_head(self)
    }

    /// Creates a Cursor pointing at the 'ghost' position after the last element.
    pub fn cursor_tail(&self) -> Cursor<&Vector<T>> {
        Iterable::cursor_tail(self)
    }

    /// Reallocates the buffer with the provided capacity, moving all initialized values across.
    /// The capacity can't be reduced below len.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) -> Result<(), CapacityOverflow> {
        Vector::<T>::check_cap(new_cap)?;
        let new_cap = new_cap.max(self.len);
        if new_cap == self.cap() { return Ok(()); }

        trace!(old_cap = self.cap(), new_cap, len = self.len, "reallocating Vector");

        let mut new_buf: Box<[MaybeUninit<T>]> = Box::new_uninit_slice(new_cap);
        new_buf[..self.len].swap_with_slice(&mut self.buf[..self.len]);

        // The old buffer now only holds uninitialized values, which are freed without dropping.
        self.buf = new_buf;
        Ok(())
    }

    /// Grows the Vector to allow for the insertion of additional elements, starting at
    /// [`DEFAULT_CAP`] and growing by the growth factor after that.
    pub(crate) fn try_grow(&mut self) -> Result<(), CapacityOverflow> {
        let new_cap = match self.cap() {
            0 => DEFAULT_CAP,
            cap => cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow)?,
        };

        self.realloc_with_cap(new_cap)
    }

    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        self.try_grow().throw()
    }

    pub(crate) const fn check_cap(cap: usize) -> Result<(), CapacityOverflow> {
        match cap.checked_mul(size_of::<T>()) {
            Some(size) if size <= MAX_CAP => Ok(()),
            _ => Err(CapacityOverflow),
        }
    }

    /// Checks that the provided index is within the bounds of self.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }
}

impl<T: Ord> Vector<T> {
    /// Sorts the Vector in place, using quicksort with a middle pivot. The sort isn't stable.
    ///
    /// # Examples
    /// ```
    /// # use lazy_collections::collections::Vector;
    /// let mut vec: Vector<_> = [4, 134, 334, 1, 734, 2, 3].into_iter().collect();
    /// vec.sort();
    /// assert_eq!(&*vec, &[1, 2, 3, 4, 134, 334, 734]);
    /// ```
    pub fn sort(&mut self) {
        quick_sort(self);
    }
}

fn quick_sort<T: Ord>(mut values: &mut [T]) {
    while values.len() > 1 {
        let (less, greater) = partition(values);

        // Recurse into the smaller side so the depth stays logarithmic.
        let (rest, tail) = mem::take(&mut values).split_at_mut(greater);
        let (lower, _) = rest.split_at_mut(less);
        if lower.len() < tail.len() {
            quick_sort(lower);
            values = tail;
        } else {
            quick_sort(tail);
            values = lower;
        }
    }
}

/// Splits values into runs less than, equal to and greater than the middle value, returning the
/// start of the equal run and the start of the greater run.
fn partition<T: Ord>(values: &mut [T]) -> (usize, usize) {
    values.swap(0, values.len() / 2);

    // values[lt] always holds a value equal to the pivot, starting the run of equal values.
    let mut lt = 0;
    let mut i = 1;
    let mut gt = values.len();
    while i < gt {
        match values[i].cmp(&values[lt]) {
            Ordering::Less => {
                values.swap(i, lt);
                lt += 1;
                i += 1;
            },
            Ordering::Equal => i += 1,
            Ordering::Greater => {
                gt -= 1;
                values.swap(i, gt);
            },
        }
    }
    (lt, gt)
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(value);
        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Drop all initialized values in place, the buffer itself holds MaybeUninit values which
        // are freed without being dropped.
        self.clear();
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len values of buf are initialized, MaybeUninit<T> has the same layout
        // as T and the borrow of self prevents mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().cast::<T>(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: The first len values of buf are initialized, MaybeUninit<T> has the same layout
        // as T and the mutable borrow of self makes the slice unique.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast::<T>(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());

        for value in self.iter() {
            vec.push(value.clone());
        }

        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "!")?;
        f.debug_list().entries(self.iter()).finish()
    }
}
