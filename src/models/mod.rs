//! Domain models
//!
//! Value types for addressing the map: sectors, hexes within a sector and
//! the locations composed from them. Models are pure data with no I/O.

pub mod constants;
pub mod errors;
pub mod hex;
pub mod location;
pub mod position;
pub mod resolver;
