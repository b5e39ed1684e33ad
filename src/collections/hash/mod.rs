//! Hash-based collections. See [`HashMap`].

pub mod map;

#[doc(inline)]
pub use map::HashMap;
