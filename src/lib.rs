//! Sector and hex addressing for a hex-grid star map.
//!
//! # Overview
//!
//! The map is a grid of sectors, each an integer (X,Y) cell. Every sector
//! holds a 32 x 40 grid of hexes named by four digit column-row tokens such
//! as `1910`. A [`Location`] is a sector plus a hex within it, and is the
//! value the rest of a map service hands around: it is totally ordered
//! (sector first, then hex), hashable, and renders back to its canonical
//! tokens.
//!
//! # Modules
//!
//! - [`models`] - Value types: [`Hex`], [`SectorCoordinate`], [`Location`]
//! - [`services`] - Sector name catalog and world-grid geometry
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Text presentation of hexes and locations
//! - [`cli`] - Command line arguments and handlers
//!
//! # Example
//!
//! ```rust
//! use astrometry::{Hex, Location, SectorCoordinate};
//!
//! let spinward = SectorCoordinate::new(-4, -1);
//! let resolver = |name: &str| (name == "Spinward Marches").then_some(spinward);
//! let regina = Location::from_text(Some("Spinward Marches"), Some("1910"), &resolver);
//!
//! assert_eq!(regina, Location::new(SectorCoordinate::new(-4, -1), Hex::new(19, 10)));
//! assert_eq!(regina.subsector_hex_string(), "0310");
//! ```

pub mod cli;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use models::errors::{LocationError, LocationResult};
pub use models::hex::Hex;
pub use models::location::{Location, LocationBuilder, LocationRecord};
pub use models::position::{SectorCoordinate, WorldCoordinates};
pub use models::resolver::SectorNameResolver;
pub use services::catalog::{SectorCatalog, SectorEntry};
