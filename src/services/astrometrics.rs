//! Conversions between sector-relative locations and the single world grid.
//!
//! World coordinates count parsecs from the reference hex (Core 0140), with
//! X increasing trailing and Y increasing rimward.

use log::debug;

use crate::models::constants::{
    HEX_DIRECTIONS, REFERENCE_HEX, REFERENCE_SECTOR, SECTOR_HEIGHT, SECTOR_WIDTH,
};
use crate::models::errors::{LocationError, LocationResult};
use crate::models::hex::Hex;
use crate::models::location::Location;
use crate::models::position::{SectorCoordinate, WorldCoordinates};

/// World coordinates of a hex within a sector.
pub fn location_to_coordinates(sector: SectorCoordinate, hex: Hex) -> WorldCoordinates {
    let x = (i64::from(sector.x) - i64::from(REFERENCE_SECTOR.0)) * i64::from(SECTOR_WIDTH)
        + (i64::from(hex.column()) - i64::from(REFERENCE_HEX.0));
    let y = (i64::from(sector.y) - i64::from(REFERENCE_SECTOR.1)) * i64::from(SECTOR_HEIGHT)
        + (i64::from(hex.row()) - i64::from(REFERENCE_HEX.1));
    WorldCoordinates::new(x, y)
}

/// World coordinates of a location; `None` for [`Location::Empty`].
pub fn coordinates_of(location: &Location) -> Option<WorldCoordinates> {
    match *location {
        Location::Empty => None,
        Location::At { sector, hex } => Some(location_to_coordinates(sector, hex)),
    }
}

/// The sector and hex holding a world coordinate. Empty when that sector
/// lies beyond the `i32` sector grid.
pub fn coordinates_to_location(coordinates: WorldCoordinates) -> Location {
    let width = i64::from(SECTOR_WIDTH);
    let height = i64::from(SECTOR_HEIGHT);
    let shifted = (
        coordinates.x.checked_add(i64::from(REFERENCE_HEX.0) - 1),
        coordinates.y.checked_add(i64::from(REFERENCE_HEX.1) - 1),
    );
    let (Some(x), Some(y)) = shifted else {
        debug!("World coordinates {} have no sector", coordinates);
        return Location::Empty;
    };

    let sector = match (
        i32::try_from(x.div_euclid(width) + i64::from(REFERENCE_SECTOR.0)),
        i32::try_from(y.div_euclid(height) + i64::from(REFERENCE_SECTOR.1)),
    ) {
        (Ok(sx), Ok(sy)) => SectorCoordinate::new(sx, sy),
        _ => {
            debug!("World coordinates {} have no sector", coordinates);
            return Location::Empty;
        }
    };
    // rem_euclid keeps these in 0..SECTOR_WIDTH / 0..SECTOR_HEIGHT
    let hex = Hex::new(
        (x.rem_euclid(width) + 1) as u8,
        (y.rem_euclid(height) + 1) as u8,
    );
    Location::new(sector, hex)
}

/// Distance in parsecs between two world hexes. Saturates at `i64::MAX`.
pub fn hex_distance(a: WorldCoordinates, b: WorldCoordinates) -> i64 {
    // i128 holds the difference of any two i64 values
    let dx = i128::from(b.x) - i128::from(a.x);
    let dy = i128::from(b.y) - i128::from(a.y);

    let adx = dx.abs();
    let mut ody = dy + adx / 2;

    if a.x.rem_euclid(2) == 0 && b.x.rem_euclid(2) != 0 {
        ody += 1;
    }

    let parsecs = (adx - ody).max(ody.max(adx));
    i64::try_from(parsecs).unwrap_or(i64::MAX)
}

/// Distance in parsecs between two locations, across sector edges.
/// `None` if either is empty.
pub fn distance(a: &Location, b: &Location) -> Option<i64> {
    Some(hex_distance(coordinates_of(a)?, coordinates_of(b)?))
}

/// The world hex adjacent in `direction`: 0 lower-left, then clockwise
/// through upper-left, up, upper-right, lower-right and down (5).
pub fn coordinates_neighbor(
    coordinates: WorldCoordinates,
    direction: u8,
) -> LocationResult<WorldCoordinates> {
    let WorldCoordinates { x: c, y: r } = coordinates;
    // Reference sits in an even world column, so even columns are the raised ones.
    let raised = i64::from(c.rem_euclid(2) == 0);
    let (dc, dr) = match direction {
        0 => (-1, 1 - raised),
        1 => (-1, -raised),
        2 => (0, -1),
        3 => (1, -raised),
        4 => (1, 1 - raised),
        5 => (0, 1),
        _ => return Err(LocationError::InvalidDirection(direction)),
    };
    match (c.checked_add(dc), r.checked_add(dr)) {
        (Some(c), Some(r)) => Ok(WorldCoordinates::new(c, r)),
        _ => Err(LocationError::OffGrid(coordinates)),
    }
}

/// The location adjacent in `direction`, stepping into the next sector at
/// an edge. An empty location has no neighbors and stays empty, and a step
/// past the last `i32` sector is empty too.
pub fn neighbor(location: &Location, direction: u8) -> LocationResult<Location> {
    if direction >= HEX_DIRECTIONS {
        return Err(LocationError::InvalidDirection(direction));
    }
    match coordinates_of(location) {
        None => Ok(Location::Empty),
        Some(coordinates) => {
            let stepped = coordinates_neighbor(coordinates, direction)?;
            Ok(coordinates_to_location(stepped))
        }
    }
}

/// The neighbors in direction order; six except at the edge of the sector grid.
pub fn neighbors(location: &Location) -> Vec<Location> {
    (0..HEX_DIRECTIONS)
        .filter_map(|direction| neighbor(location, direction).ok())
        .filter(|l| !l.is_empty())
        .collect()
}
