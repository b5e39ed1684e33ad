use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// A key was used to index a [`HashMap`](super::HashMap) which had no entry for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingKey;

impl Display for MissingKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No entry found for key in HashMap!")
    }
}

impl Error for MissingKey {}
