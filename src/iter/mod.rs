//! The lazy iteration core shared by every collection in this crate.
//!
//! # Method
//! Rather than each collection providing its own family of iterator types, collections implement
//! [`Iterable`] for a shared reference to themselves. A [`Cursor`] pairs an Iterable source with a
//! position, and can be adapted with [`Cursor::map`] and [`Cursor::filter`] into another Cursor
//! whose source is a [`Map`] or [`Filter`] layer wrapping the original. Layers are resolved at
//! compile time and each one reuses the strongly typed [`Position`] of the layer below it.
//!
//! Nothing is materialized along the way. Values are read from the bottom of the stack when
//! [`Cursor::value`] is called, and moving a Cursor only ever moves the underlying position.
//!
//! # Errors
//! Reading or moving past either end of a source returns a [`CursorError`] rather than exhibiting
//! undefined behavior.

mod cursor;
mod error;
mod filter;
mod iterable;
mod map;
mod position;
mod values;

pub use cursor::*;
pub use error::*;
pub use filter::*;
pub use iterable::*;
pub use map::*;
pub use position::*;
pub use values::*;

#[cfg(test)]
mod tests;
