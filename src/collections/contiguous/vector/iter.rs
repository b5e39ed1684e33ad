use std::iter::FusedIterator;
use std::mem::{self, MaybeUninit};
use std::ptr;
use std::slice;

use super::Vector;
use crate::iter::{CursorError, Iterable, Position};

impl<'a, T> Iterable for &'a Vector<T> {
    type Item = &'a T;

    type Pos = Position<usize>;

    fn begin(&self) -> Self::Pos {
        if self.is_empty() {
            Position::Tail
        } else {
            Position::At(0)
        }
    }

    fn end_sentinel(&self) -> Self::Pos {
        Position::Tail
    }

    fn rewind_sentinel(&self) -> Self::Pos {
        Position::Head
    }

    fn advance(&self, pos: Self::Pos) -> Result<Self::Pos, CursorError> {
        match pos {
            Position::Head => Ok(self.begin()),
            Position::At(index) if index >= self.len() => Err(CursorError::Stale),
            Position::At(index) if index + 1 == self.len() => Ok(Position::Tail),
            Position::At(index) => Ok(Position::At(index + 1)),
            Position::Tail => Err(CursorError::PastEnd),
        }
    }

    fn retreat(&self, pos: Self::Pos) -> Result<Self::Pos, CursorError> {
        match pos {
            Position::Head => Err(CursorError::BeforeStart),
            Position::At(index) if index >= self.len() => Err(CursorError::Stale),
            Position::At(0) => Ok(Position::Head),
            Position::At(index) => Ok(Position::At(index - 1)),
            Position::Tail => match self.len().checked_sub(1) {
                Some(last) => Ok(Position::At(last)),
                None => Ok(Position::Head),
            },
        }
    }

    fn is_live(&self, pos: Self::Pos) -> bool {
        matches!(pos, Position::At(index) if index < self.len())
    }

    fn read(&self, pos: Self::Pos) -> Result<Self::Item, CursorError> {
        // Copy the reference out so the value borrows the Vector rather than self.
        let vec: &'a Vector<T> = *self;
        match pos {
            Position::Head => Err(CursorError::BeforeStart),
            Position::At(index) => vec.get(index).ok_or(CursorError::Stale),
            Position::Tail => Err(CursorError::PastEnd),
        }
    }

    fn origin(&self) -> *const () {
        ptr::from_ref::<Vector<T>>(*self).cast()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let back = mem::replace(&mut self.len, 0);
        IntoIter {
            buf: mem::take(&mut self.buf),
            front: 0,
            back,
        }
    }
}

/// An owned [`Iterator`] over the values of a [`Vector`].
pub struct IntoIter<T> {
    // Values in front..back are initialized, everything else has been moved out or was never
    // initialized.
    pub(crate) buf: Box<[MaybeUninit<T>]>,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<T> IntoIter<T> {
    /// Returns the values which haven't been yielded yet as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: All values from front to back are initialized.
        unsafe {
            slice::from_raw_parts(self.buf.as_ptr().add(self.front).cast::<T>(), self.len())
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None; }

        let index = self.front;
        self.front += 1;
        // SAFETY: index was within front..back, so it is initialized and is now excluded from the
        // remaining range.
        Some(unsafe { self.buf[index].assume_init_read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None; }

        self.back -= 1;
        // SAFETY: The old back - 1 was within front..back, so it is initialized and is now
        // excluded from the remaining range.
        Some(unsafe { self.buf[self.back].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for value in &mut self.buf[self.front..self.back] {
            // SAFETY: All values from front to back are initialized and are never read again.
            unsafe { value.assume_init_drop(); }
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
