use std::fmt::{self, Debug, Formatter};
use std::ptr;

use super::{CursorError, Filter, Iterable, Map, Values, ValuesRev};

/// A position within an [`Iterable`] source, along with the source itself.
///
/// Cursors own no data. When the source is a reference to a container, a Cursor is bounded by
/// that borrow, so the container can't be structurally modified while the Cursor exists.
///
/// Adapting a Cursor with [`map`](Cursor::map) or [`filter`](Cursor::filter) wraps its source in
/// another layer and carries the current position over, so layers can be stacked arbitrarily deep
/// without producing any intermediate values.
///
/// # Examples
/// ```
/// # use lazy_collections::collections::Vector;
/// let vec: Vector<f32> = [123.5, 645.026, 9.78, 1.0].into_iter().collect();
///
/// let mut cursor = vec.cursor_front()
///     .map(|x| x * x)
///     .filter(|x| *x < 100.0);
///
/// assert_eq!(cursor.value(), Ok(9.78 * 9.78));
/// cursor.next().unwrap();
/// assert_eq!(cursor.value(), Ok(1.0));
/// cursor.next().unwrap();
/// assert!(!cursor.valid());
/// ```
#[derive(Clone)]
pub struct Cursor<S: Iterable> {
    pub(crate) source: S,
    pub(crate) pos: S::Pos,
}

impl<S: Iterable> Cursor<S> {
    /// Creates a Cursor over `source` at the provided position.
    pub const fn new(source: S, pos: S::Pos) -> Cursor<S> {
        Cursor { source, pos }
    }

    /// Returns the current position of the Cursor.
    pub const fn position(&self) -> S::Pos {
        self.pos
    }

    /// Returns a reference to the source of the Cursor.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the Cursor, returning its source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Moves the Cursor to the next position. If there is no next position, the Cursor doesn't
    /// move and an error is returned instead.
    pub fn next(&mut self) -> Result<(), CursorError> {
        self.pos = self.source.advance(self.pos)?;
        Ok(())
    }

    /// Moves the Cursor to the previous position. If there is no previous position, the Cursor
    /// doesn't move and an error is returned instead.
    pub fn prev(&mut self) -> Result<(), CursorError> {
        self.pos = self.source.retreat(self.pos)?;
        Ok(())
    }

    /// Returns true if the Cursor points to a readable value.
    pub fn valid(&self) -> bool {
        self.source.is_live(self.pos)
    }

    /// Reads the value at the Cursor's position. For mapped Cursors, the transform is applied
    /// again on every call.
    pub fn value(&self) -> Result<S::Item, CursorError> {
        self.source.read(self.pos)
    }

    /// Moves the Cursor to the first element, or the end sentinel if there are none.
    pub fn seek_front(&mut self) -> &mut Self {
        self.pos = self.source.begin();
        self
    }

    /// Moves the Cursor to the last element, or the rewind sentinel if there are none.
    pub fn seek_back(&mut self) -> &mut Self {
        self.pos = self.source.last();
        self
    }

    /// Moves the Cursor to the 'ghost' position before the first element.
    pub fn rewind(&mut self) -> &mut Self {
        self.pos = self.source.rewind_sentinel();
        self
    }

    /// Moves the Cursor to the 'ghost' position after the last element.
    pub fn seek_end(&mut self) -> &mut Self {
        self.pos = self.source.end_sentinel();
        self
    }

    /// Returns a Cursor which applies `transform` to every value read from this one. The new
    /// Cursor starts at the current position.
    pub fn map<N, F>(self, transform: F) -> Cursor<Map<S, F>>
    where
        F: Fn(S::Item) -> N,
    {
        Cursor {
            source: Map::new(self.source, transform),
            pos: self.pos,
        }
    }

    /// Returns a Cursor which only visits values accepted by `predicate`. The new Cursor starts
    /// at the first accepted value at or after the current position.
    pub fn filter<P>(self, predicate: P) -> Cursor<Filter<S, P>>
    where
        P: Fn(&S::Item) -> bool,
    {
        let source = Filter::new(self.source, predicate);
        let pos = source.seek_forward(self.pos);
        Cursor { source, pos }
    }

    /// Returns a Cursor which only visits values accepted by `predicate`. The new Cursor starts
    /// at the last accepted value at or before the current position.
    pub fn filter_back<P>(self, predicate: P) -> Cursor<Filter<S, P>>
    where
        P: Fn(&S::Item) -> bool,
    {
        let source = Filter::new(self.source, predicate);
        let pos = source.seek_backward(self.pos);
        Cursor { source, pos }
    }

    /// Returns an [`Iterator`] over the value at the current position and all values after it.
    pub fn values(self) -> Values<S> {
        Values { cursor: self }
    }

    /// Returns an [`Iterator`] over the value at the current position and all values before it,
    /// in reverse order.
    pub fn values_rev(self) -> ValuesRev<S> {
        ValuesRev { cursor: self }
    }
}

impl<S: Iterable> PartialEq for Cursor<S> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.source.origin(), other.source.origin()) && self.pos == other.pos
    }
}

impl<S: Iterable> Eq for Cursor<S> {}

impl<S: Iterable> Debug for Cursor<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("origin", &self.source.origin())
            .field("pos", &self.pos)
            .finish()
    }
}
