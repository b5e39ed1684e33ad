//! A lazily computed sequence of indices. See [`Range`].

use std::ptr;

use crate::iter::{Cursor, CursorError, Iterable, Position};

/// The half-open sequence of numbers from `start` up to, but not including, `end`.
///
/// A Range stores only its bounds; each value is computed when read. Positions hold the value
/// itself, so a [`Cursor`] over a Range can be compared and adapted like one over any other
/// collection.
///
/// # Examples
/// ```
/// # use lazy_collections::collections::Range;
/// let range = Range::new(2, 10);
/// let odd: Vec<usize> = range.cursor_front()
///     .filter(|i| i % 2 == 1)
///     .map(|i| i * 10)
///     .values()
///     .collect();
/// assert_eq!(odd, [30, 50, 70, 90]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    start: usize,
    end: usize,
}

impl Range {
    /// Creates a Range from `start` up to `end`. If `end` isn't greater than `start`, the Range is
    /// empty.
    pub const fn new(start: usize, end: usize) -> Range {
        Range { start, end }
    }

    /// Creates a Range from 0 up to `end`.
    pub const fn to(end: usize) -> Range {
        Range::new(0, end)
    }

    /// Returns the first value of the Range, which it would hold even if it were empty.
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the exclusive upper bound of the Range.
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns the number of values in the Range.
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the Range contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `value` is part of the Range.
    pub const fn contains(&self, value: usize) -> bool {
        self.start <= value && value < self.end
    }

    /// Creates a Cursor pointing at the first value of the Range.
    pub fn cursor_front(&self) -> Cursor<&Range> {
        Iterable::cursor_front(self)
    }

    /// Creates a Cursor pointing at the last value of the Range.
    pub fn cursor_back(&self) -> Cursor<&Range> {
        Iterable::cursor_back(self)
    }
}

impl Iterable for &Range {
    type Item = usize;

    type Pos = Position<usize>;

    fn begin(&self) -> Self::Pos {
        if self.is_empty() {
            Position::Tail
        } else {
            Position::At(self.start)
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
            Position::At(value) if !self.contains(value) => Err(CursorError::Stale),
            Position::At(value) if value + 1 == self.end => Ok(Position::Tail),
            Position::At(value) => Ok(Position::At(value + 1)),
            Position::Tail => Err(CursorError::PastEnd),
        }
    }

    fn retreat(&self, pos: Self::Pos) -> Result<Self::Pos, CursorError> {
        match pos {
            Position::Head => Err(CursorError::BeforeStart),
            Position::At(value) if !self.contains(value) => Err(CursorError::Stale),
            Position::At(value) if value == self.start => Ok(Position::Head),
            Position::At(value) => Ok(Position::At(value - 1)),
            Position::Tail if self.is_empty() => Ok(Position::Head),
            Position::Tail => Ok(Position::At(self.end - 1)),
        }
    }

    fn is_live(&self, pos: Self::Pos) -> bool {
        matches!(pos, Position::At(value) if self.contains(value))
    }

    fn read(&self, pos: Self::Pos) -> Result<Self::Item, CursorError> {
        match pos {
            Position::Head => Err(CursorError::BeforeStart),
            Position::At(value) if self.contains(value) => Ok(value),
            Position::At(_) => Err(CursorError::Stale),
            Position::Tail => Err(CursorError::PastEnd),
        }
    }

    fn origin(&self) -> *const () {
        ptr::from_ref::<Range>(*self).cast()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let range = Range::to(3);
        assert_eq!(range.len(), 3);
        assert_eq!(range.cursor_front().values().collect::<Vec<_>>(), [0, 1, 2]);
        assert_eq!(range.cursor_back().values_rev().collect::<Vec<_>>(), [2, 1, 0]);

        let empty = Range::new(5, 2);
        assert!(empty.is_empty(), "A backwards Range should be empty.");
        assert_eq!(empty.cursor_front().position(), Position::Tail);
        assert_eq!(empty.cursor_back().position(), Position::Head);
    }

    #[test]
    fn test_cursor_moves() {
        let range = Range::new(4, 6);
        let mut cursor = range.cursor_front();
        assert_eq!(cursor.value(), Ok(4));
        assert_eq!(cursor.prev(), Ok(()));
        assert_eq!(cursor.prev(), Err(CursorError::BeforeStart));
        cursor.seek_end();
        assert_eq!(cursor.next(), Err(CursorError::PastEnd));
        cursor.prev().unwrap();
        assert_eq!(cursor.value(), Ok(5));

        let outside = Cursor::new(&range, Position::At(9));
        assert_eq!(outside.value(), Err(CursorError::Stale));
        assert!(!outside.valid());
    }
}
