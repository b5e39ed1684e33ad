use derive_more::{Display, Error, IsVariant};

/// The reasons a [`Cursor`](super::Cursor) can fail to read or move.
///
/// Every variant describes a position that doesn't hold a readable element, so none of these
/// errors leave the cursor in an inconsistent state: a failed move keeps the previous position.
#[derive(Debug, Display, Error, IsVariant, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorError {
    /// The position is (or would move) past the end of its source.
    #[display("Cursor moved or read past the end of its source!")]
    PastEnd,
    /// The position is (or would move) before the start of its source.
    #[display("Cursor moved or read before the start of its source!")]
    BeforeStart,
    /// The position refers to an element that no longer exists in its source.
    #[display("Cursor position no longer refers to an element of its source!")]
    Stale,
    /// The position holds an element that the filter layer above it rejects.
    #[display("Cursor position holds an element rejected by its filter!")]
    Rejected,
}
