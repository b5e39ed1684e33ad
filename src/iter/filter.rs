use super::{CursorError, Iterable};

/// A layer which hides every value from the source below it that `predicate` rejects.
///
/// Moving through a Filter repeats the inner move until an accepted value or a sentinel is
/// reached, so a [`Cursor`](super::Cursor) over a Filter is always either at a sentinel or at an
/// accepted value.
///
/// Created by [`Cursor::filter`](super::Cursor::filter) and
/// [`Cursor::filter_back`](super::Cursor::filter_back).
#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    pub(crate) inner: S,
    pub(crate) predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) const fn new(inner: S, predicate: P) -> Filter<S, P> {
        Filter { inner, predicate }
    }

    /// Returns a reference to the source below this layer.
    pub const fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S, P> Filter<S, P>
where
    S: Iterable,
    P: Fn(&S::Item) -> bool,
{
    fn accepts(&self, pos: S::Pos) -> bool {
        self.inner.read(pos).is_ok_and(|value| (self.predicate)(&value))
    }

    /// Moves forward from `pos` until reaching an accepted value or a position that can't be
    /// read. `pos` itself is returned if it is already accepted.
    pub(crate) fn seek_forward(&self, mut pos: S::Pos) -> S::Pos {
        while let Ok(value) = self.inner.read(pos)
            && !(self.predicate)(&value)
        {
            match self.inner.advance(pos) {
                Ok(next) => pos = next,
                Err(_) => break,
            }
        }
        pos
    }

    /// Moves backward from `pos` until reaching an accepted value or a position that can't be
    /// read. `pos` itself is returned if it is already accepted.
    pub(crate) fn seek_backward(&self, mut pos: S::Pos) -> S::Pos {
        while let Ok(value) = self.inner.read(pos)
            && !(self.predicate)(&value)
        {
            match self.inner.retreat(pos) {
                Ok(prev) => pos = prev,
                Err(_) => break,
            }
        }
        pos
    }
}

impl<S, P> Iterable for Filter<S, P>
where
    S: Iterable,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    type Pos = S::Pos;

    fn begin(&self) -> Self::Pos {
        self.seek_forward(self.inner.begin())
    }

    fn end_sentinel(&self) -> Self::Pos {
        self.inner.end_sentinel()
    }

    fn rewind_sentinel(&self) -> Self::Pos {
        self.inner.rewind_sentinel()
    }

    fn advance(&self, pos: Self::Pos) -> Result<Self::Pos, CursorError> {
        Ok(self.seek_forward(self.inner.advance(pos)?))
    }

    fn retreat(&self, pos: Self::Pos) -> Result<Self::Pos, CursorError> {
        Ok(self.seek_backward(self.inner.retreat(pos)?))
    }

    fn is_live(&self, pos: Self::Pos) -> bool {
        self.accepts(pos)
    }

    fn read(&self, pos: Self::Pos) -> Result<Self::Item, CursorError> {
        let value = self.inner.read(pos)?;
        if (self.predicate)(&value) {
            Ok(value)
        } else {
            Err(CursorError::Rejected)
        }
    }

    fn origin(&self) -> *const () {
        self.inner.origin()
    }
}
