use super::{CursorError, Iterable};

/// A layer which transforms every value read from the source below it.
///
/// Values aren't cached. Each read calls `transform` again with a fresh value from the inner
/// source, so `transform` should be cheap and free of side effects.
///
/// Created by [`Cursor::map`](super::Cursor::map).
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    pub(crate) inner: S,
    pub(crate) transform: F,
}

impl<S, F> Map<S, F> {
    pub(crate) const fn new(inner: S, transform: F) -> Map<S, F> {
        Map { inner, transform }
    }

    /// Returns a reference to the source below this layer.
    pub const fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S, N, F> Iterable for Map<S, F>
where
    S: Iterable,
    F: Fn(S::Item) -> N,
{
    type Item = N;

    type Pos = S::Pos;

    fn begin(&self) -> Self::Pos {
        self.inner.begin()
    }

    fn end_sentinel(&self) -> Self::Pos {
        self.inner.end_sentinel()
    }

    fn rewind_sentinel(&self) -> Self::Pos {
        self.inner.rewind_sentinel()
    }

    fn advance(&self, pos: Self::Pos) -> Result<Self::Pos, CursorError> {
        self.inner.advance(pos)
    }

    fn retreat(&self, pos: Self::Pos) -> Result<Self::Pos, CursorError> {
        self.inner.retreat(pos)
    }

    fn is_live(&self, pos: Self::Pos) -> bool {
        self.inner.is_live(pos)
    }

    fn read(&self, pos: Self::Pos) -> Result<Self::Item, CursorError> {
        self.inner.read(pos).map(&self.transform)
    }

    fn origin(&self) -> *const () {
        self.inner.origin()
    }
}
