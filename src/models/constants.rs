//! Grid geometry shared by every coordinate type.

/// Columns of hexes in one sector.
pub const SECTOR_WIDTH: i32 = 32;
/// Rows of hexes in one sector.
pub const SECTOR_HEIGHT: i32 = 40;

/// Columns of hexes in one subsector.
pub const SUBSECTOR_WIDTH: i32 = 8;
/// Rows of hexes in one subsector.
pub const SUBSECTOR_HEIGHT: i32 = 10;

/// Subsectors across (and down) a sector.
pub const SUBSECTORS_PER_SIDE: i32 = SECTOR_WIDTH / SUBSECTOR_WIDTH;

/// Multiplier separating column from row in the packed integer form.
pub const HEX_PACKING: i32 = 100;

/// Width of the canonical hex token.
pub const HEX_TOKEN_LEN: usize = 4;

/// Packed value of the hex at the middle of a sector (1620).
pub const SECTOR_CENTRAL_HEX: i32 = (SECTOR_WIDTH / 2) * HEX_PACKING + SECTOR_HEIGHT / 2;

/// Sector holding the origin of world coordinates.
pub const REFERENCE_SECTOR: (i32, i32) = (0, 0);
/// Hex within [`REFERENCE_SECTOR`] at the origin of world coordinates (0140).
pub const REFERENCE_HEX: (u8, u8) = (1, 40);

/// Subsector letters, row-major from the upper-left corner.
pub const SUBSECTOR_LETTERS: [char; 16] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
];

/// Neighbor directions around a hex, starting lower-left and going clockwise.
pub const HEX_DIRECTIONS: u8 = 6;
