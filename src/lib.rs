//! Collections with lazily composed, bi-directional cursors.
//!
//! # Purpose
//! Iterating a collection usually means either consuming a one-way [`Iterator`] or materializing
//! intermediate results. This crate takes a different approach: every collection hands out
//! [`Cursor`](iter::Cursor)s, which can move in both directions, and which can be wrapped in
//! [`map`](iter::Cursor::map) and [`filter`](iter::Cursor::filter) layers without producing any
//! values until one is read.
//!
//! # Method
//! The [`iter`] module defines the [`Iterable`](iter::Iterable) capability. Containers implement
//! it for a shared reference to themselves, handing out position handles rather than tracking a
//! position internally. Layers implement it by wrapping another Iterable and reusing its
//! positions, so a stack of adapters resolves entirely at compile time.
//!
//! The [`collections`] module contains the containers themselves:
//! - [`Vector`](collections::Vector): contiguous storage, positioned by index.
//! - [`LinkedList`](collections::LinkedList): arena-backed doubly linked nodes, positioned by
//!   generational keys, so a key kept past a removal is detected as stale.
//! - [`HashMap`](collections::HashMap): Robin Hood open addressing with tombstone deletion.
//! - [`Range`](collections::Range): computed indices with no storage at all.
//!
//! # Error Handling
//! Reading or moving a Cursor never causes undefined behaviour. Positions which don't refer to an
//! element return a [`CursorError`](iter::CursorError) describing why. Containers follow the same
//! pattern: each fallible method has a `try_` form returning a strongly typed error, and a
//! panicking form for the common case where the caller already knows the access is valid.
//!
//! # Logging
//! Structural events such as reallocation and rehashing are emitted through [`tracing`] at the
//! `debug` and `trace` levels. No subscriber is installed by this crate.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
pub mod iter;

pub(crate) mod util;
