use std::fmt;

use serde::{Deserialize, Serialize};

/// A sector cell on the galactic grid.
/// X increases spinward-to-trailing, Y increases coreward-to-rimward.
/// Either may be negative; (0,0) is the sector holding the reference hex.
///
/// Ordering is X first, then Y.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SectorCoordinate {
    pub x: i32,
    pub y: i32,
}

impl SectorCoordinate {
    pub const ORIGIN: SectorCoordinate = SectorCoordinate { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        SectorCoordinate { x, y }
    }
}

impl fmt::Display for SectorCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A hex on the single grid spanning all sectors, counted in parsecs from
/// the reference hex. Produced by `services::astrometrics`.
///
/// Wider than [`SectorCoordinate`] so every hex of every sector has one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldCoordinates {
    pub x: i64,
    pub y: i64,
}

impl WorldCoordinates {
    pub const fn new(x: i64, y: i64) -> Self {
        WorldCoordinates { x, y }
    }
}

impl fmt::Display for WorldCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
