//! Collection types whose contents can be traversed with [`Cursor`](crate::iter::Cursor)s.
//!
//! Each type implements [`Iterable`](crate::iter::Iterable) for a shared reference to itself, so
//! a Cursor borrows the collection it was created from. Each collection is behind its own Cargo
//! feature, all of which are enabled by default through `collections-all`.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "range")]
pub mod range;

#[cfg(feature = "contiguous")]
#[doc(inline)]
pub use contiguous::Vector;
#[cfg(feature = "hash")]
#[doc(inline)]
pub use hash::HashMap;
#[cfg(feature = "linked")]
#[doc(inline)]
pub use linked::LinkedList;
#[cfg(feature = "range")]
#[doc(inline)]
pub use range::Range;
