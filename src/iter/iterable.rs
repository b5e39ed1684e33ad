use std::fmt::Debug;

use super::{Cursor, CursorError};

/// The navigation contract shared by every container and every layer stacked on top of one.
///
/// An Iterable doesn't track a position itself. Instead, it hands out opaque position handles
/// ([`Self::Pos`]) and answers questions about them, leaving the current position to a
/// [`Cursor`]. This split lets layers like [`Map`](super::Map) and [`Filter`](super::Filter) wrap
/// any source and reuse its positions directly, rather than reinterpreting them.
///
/// Implementations are usually written for a shared reference to a container (`&Vector<T>`), so
/// that the source of a Cursor is cheap to move around and the borrow checker prevents the
/// container from being mutated while a Cursor is alive.
///
/// # Contract
/// - [`advance`](Iterable::advance) must strictly make progress: it never returns the position it
///   was given. Combined with a finite source, this guarantees that any stack of layers
///   eventually reaches [`end_sentinel`](Iterable::end_sentinel).
/// - [`is_live`](Iterable::is_live) is true exactly when [`read`](Iterable::read) returns `Ok`.
pub trait Iterable {
    /// The value produced by reading a position.
    type Item;

    /// The handle used to refer to a position within this source.
    type Pos: Copy + Eq + Debug;

    /// Returns the position of the first element, or the end sentinel if there are none.
    fn begin(&self) -> Self::Pos;

    /// Returns the canonical position after the last element.
    fn end_sentinel(&self) -> Self::Pos;

    /// Returns the canonical position before the first element.
    fn rewind_sentinel(&self) -> Self::Pos;

    /// Returns the successor of `pos`.
    fn advance(&self, pos: Self::Pos) -> Result<Self::Pos, CursorError>;

    /// Returns the predecessor of `pos`.
    fn retreat(&self, pos: Self::Pos) -> Result<Self::Pos, CursorError>;

    /// Returns true if `pos` refers to a readable element.
    fn is_live(&self, pos: Self::Pos) -> bool;

    /// Reads the value at `pos`.
    fn read(&self, pos: Self::Pos) -> Result<Self::Item, CursorError>;

    /// Returns the address of the container at the bottom of this source, identifying it for
    /// the purposes of comparing Cursors.
    fn origin(&self) -> *const ();

    /// Returns the position of the last element, or the rewind sentinel if there are none.
    fn last(&self) -> Self::Pos {
        self.retreat(self.end_sentinel())
            .unwrap_or_else(|_| self.rewind_sentinel())
    }

    /// Creates a Cursor pointing at the first element of this source.
    fn cursor_front(self) -> Cursor<Self>
    where
        Self: Sized,
    {
        let pos = self.begin();
        Cursor::new(self, pos)
    }

    /// Creates a Cursor pointing at the last element of this source.
    fn cursor_back(self) -> Cursor<Self>
    where
        Self: Sized,
    {
        let pos = self.last();
        Cursor::new(self, pos)
    }

    /// Creates a Cursor pointing at the 'ghost' position before the first element.
    fn cursor_head(self) -> Cursor<Self>
    where
        Self: Sized,
    {
        let pos = self.rewind_sentinel();
        Cursor::new(self, pos)
    }

    /// Creates a Cursor pointing at the 'ghost' position after the last element.
    fn cursor_tail(self) -> Cursor<Self>
    where
        Self: Sized,
    {
        let pos = self.end_sentinel();
        Cursor::new(self, pos)
    }
}
