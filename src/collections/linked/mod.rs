//! Linked collection types. Primarily revolves around [`LinkedList`], which is traversed with the
//! [`Cursor`](crate::iter::Cursor) type shared by all collections.

pub mod list;

#[doc(inline)]
pub use list::LinkedList;
