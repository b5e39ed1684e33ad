use derive_more::IsVariant;

/// A position within an [`Iterable`](super::Iterable) source, including the two 'ghost' positions
/// either side of its elements.
///
/// `H` is the handle a source uses to refer to one of its elements: an index for contiguous
/// storage or a generational key for linked storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Position<H> {
    /// The 'ghost' position before the first element.
    Head,
    /// A position holding the handle of an element.
    At(H),
    /// The 'ghost' position after the last element.
    Tail,
}

impl<H> Position<H> {
    /// Returns the handle held by this position, if it isn't a ghost.
    pub fn handle(self) -> Option<H> {
        match self {
            Position::At(handle) => Some(handle),
            Position::Head | Position::Tail => None,
        }
    }
}

impl<H> From<Option<H>> for Position<H> {
    /// Converts a successor handle into a position, treating `None` as running off the end.
    fn from(value: Option<H>) -> Self {
        match value {
            Some(handle) => Position::At(handle),
            None => Position::Tail,
        }
    }
}
