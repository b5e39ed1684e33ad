use std::iter::FusedIterator;

use super::{Cursor, Iterable};

/// An [`Iterator`] which reads a [`Cursor`]'s value and then moves it forward, bridging Cursors
/// into `for` loops and other [`Iterator`] consumers.
///
/// Created by [`Cursor::values`].
#[derive(Debug, Clone)]
pub struct Values<S: Iterable> {
    pub(crate) cursor: Cursor<S>,
}

impl<S: Iterable> Values<S> {
    /// Consumes the Iterator, returning the Cursor at the position of the next value.
    pub fn into_cursor(self) -> Cursor<S> {
        self.cursor
    }
}

impl<S: Iterable> Iterator for Values<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.cursor.value().ok()?;
        // The final value moves the cursor onto the end sentinel, which ends iteration.
        let _ = self.cursor.next();
        Some(value)
    }
}

impl<S: Iterable> FusedIterator for Values<S> {}

/// An [`Iterator`] which reads a [`Cursor`]'s value and then moves it backward.
///
/// Created by [`Cursor::values_rev`].
#[derive(Debug, Clone)]
pub struct ValuesRev<S: Iterable> {
    pub(crate) cursor: Cursor<S>,
}

impl<S: Iterable> ValuesRev<S> {
    /// Consumes the Iterator, returning the Cursor at the position of the next value.
    pub fn into_cursor(self) -> Cursor<S> {
        self.cursor
    }
}

impl<S: Iterable> Iterator for ValuesRev<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.cursor.value().ok()?;
        let _ = self.cursor.prev();
        Some(value)
    }
}

impl<S: Iterable> FusedIterator for ValuesRev<S> {}
