use std::fmt::{self, Debug, Formatter};

/// Formats the contained string verbatim when used with `{:?}`, for building debug lists out of
/// pre-formatted entries.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
