//! A module containing [`HashMap`] and associtated types.
//!
//! Entries are placed with Robin Hood open addressing: while probing for a slot, an incoming entry
//! takes the place of any entry that sits closer to its ideal slot, and continues probing with
//! the displaced entry instead. Removal leaves a tombstone behind, which is reclaimed by later
//! insertions or purged when the table is rehashed.
//!
//! [`HashMap`] is also re-exported under the parent module.

mod error;
mod hash_map;
mod iter;

pub use error::*;
pub use hash_map::*;
pub use iter::*;
