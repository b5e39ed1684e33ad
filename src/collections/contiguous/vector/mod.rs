//! A module containing [`Vector`] and associated types.
//!
//! Beyond the owned [`IntoIter`], borrowed iteration is provided either through the slice
//! iterators reachable via [`Deref`](std::ops::Deref), or lazily through [`Vector::cursor_front`]
//! and the rest of the [`iter`](crate::iter) module.
//!
//! [`Vector`] is also re-exported under the parent module.

mod iter;
mod vector;

pub use iter::*;
pub use vector::*;

#[cfg(test)]
mod tests;
