use std::hash::{BuildHasher, Hash};
use std::iter::{Flatten, FusedIterator};
use std::{ptr, vec};

use super::{Bucket, HashMap};
use crate::iter::{CursorError, Iterable, Position, Values};

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Returns the first position holding a live entry at or after slot `from`.
    fn next_live(&self, from: usize) -> Position<usize> {
        Position::from((from..self.cap()).find(|&i| self.meta[i].is_live()))
    }

    /// Returns the last position holding a live entry before slot `until`.
    fn prev_live(&self, until: usize) -> Position<usize> {
        (0..until).rev()
            .find(|&i| self.meta[i].is_live())
            .map_or(Position::Head, Position::At)
    }
}

/// Positions are slot indices, so entries are visited in slot order and empty slots or tombstones
/// are skipped.
impl<'a, K: Hash + Eq, V, B: BuildHasher> Iterable for &'a HashMap<K, V, B> {
    type Item = (&'a K, &'a V);

    type Pos = Position<usize>;

    fn begin(&self) -> Self::Pos {
        self.next_live(0)
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
            Position::At(index) if index >= self.cap() => Err(CursorError::Stale),
            Position::At(index) => Ok(self.next_live(index + 1)),
            Position::Tail => Err(CursorError::PastEnd),
        }
    }

    fn retreat(&self, pos: Self::Pos) -> Result<Self::Pos, CursorError> {
        match pos {
            Position::Head => Err(CursorError::BeforeStart),
            Position::At(index) if index >= self.cap() => Err(CursorError::Stale),
            Position::At(index) => Ok(self.prev_live(index)),
            Position::Tail => Ok(self.prev_live(self.cap())),
        }
    }

    fn is_live(&self, pos: Self::Pos) -> bool {
        matches!(pos, Position::At(index) if self.meta.get(index).is_some_and(|m| m.is_live()))
    }

    fn read(&self, pos: Self::Pos) -> Result<Self::Item, CursorError> {
        // Copy the reference out so the entry borrows the HashMap rather than self.
        let map: &'a HashMap<K, V, B> = *self;
        match pos {
            Position::Head => Err(CursorError::BeforeStart),
            Position::At(index) => match map.slots.get(index) {
                Some(Some((k, v))) => Ok((k, v)),
                _ => Err(CursorError::Stale),
            },
            Position::Tail => Err(CursorError::PastEnd),
        }
    }

    fn origin(&self) -> *const () {
        ptr::from_ref::<HashMap<K, V, B>>(*self).cast()
    }
}

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a HashMap<K, V, B> {
    type Item = (&'a K, &'a V);

    type IntoIter = Values<&'a HashMap<K, V, B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> IntoIterator for HashMap<K, V, B> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            len: self.len,
            inner: self.slots.into_iter().flatten(),
        }
    }
}

/// An owned [`Iterator`] over the entries of a [`HashMap`], in slot order.
pub struct IntoIter<K, V> {
    pub(crate) inner: Flatten<vec::IntoIter<Bucket<K, V>>>,
    pub(crate) len: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.inner.next()?;
        self.len -= 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}
