//! Hex addresses within a single sector.
//!
//! A hex is named by a four digit token: two digits of column followed by
//! two digits of row, so column 19 row 10 is `"1910"`. Columns run 1-32 and
//! rows 1-40. The all-zero hex is the "no hex" value and is never valid.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::constants::{
    HEX_PACKING, HEX_TOKEN_LEN, SECTOR_HEIGHT, SECTOR_WIDTH, SUBSECTORS_PER_SIDE, SUBSECTOR_HEIGHT,
    SUBSECTOR_LETTERS, SUBSECTOR_WIDTH,
};
use super::errors::{LocationError, LocationResult};

/// A column-row position within a sector's hex grid.
///
/// Ordering is column first, then row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hex {
    x: u8,
    y: u8,
}

impl Hex {
    /// The unset hex (0000).
    pub const EMPTY: Hex = Hex { x: 0, y: 0 };

    pub const fn new(column: u8, row: u8) -> Self {
        Hex { x: column, y: row }
    }

    /// Decode the packed `column * 100 + row` form.
    ///
    /// Values outside 0-9999 cannot be packed hexes and decode to [`Hex::EMPTY`].
    pub fn from_int(packed: i32) -> Self {
        if !(0..HEX_PACKING * HEX_PACKING).contains(&packed) {
            debug!("packed hex {} out of range", packed);
            return Hex::EMPTY;
        }
        Hex {
            x: (packed / HEX_PACKING) as u8,
            y: (packed % HEX_PACKING) as u8,
        }
    }

    /// Parse a hex token, degrading malformed text to [`Hex::EMPTY`].
    ///
    /// Use [`str::parse`] when the caller needs to tell malformed text apart
    /// from an intentionally blank token.
    pub fn parse(text: &str) -> Self {
        match text.parse() {
            Ok(hex) => hex,
            Err(err) => {
                debug!("{}", err);
                Hex::EMPTY
            }
        }
    }

    pub fn column(&self) -> u8 {
        self.x
    }

    pub fn row(&self) -> u8 {
        self.y
    }

    /// Packed `column * 100 + row` form.
    pub fn to_int(&self) -> i32 {
        i32::from(self.x) * HEX_PACKING + i32::from(self.y)
    }

    pub fn is_empty(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Whether the hex lies on the sector grid.
    pub fn is_valid(&self) -> bool {
        let (x, y) = (i32::from(self.x), i32::from(self.y));
        (1..=SECTOR_WIDTH).contains(&x) && (1..=SECTOR_HEIGHT).contains(&y)
    }

    /// Token relative to the containing subsector, e.g. 1910 -> "0310".
    pub fn to_subsector_string(&self) -> String {
        let x = (i32::from(self.x) - 1) % SUBSECTOR_WIDTH + 1;
        let y = (i32::from(self.y) - 1) % SUBSECTOR_HEIGHT + 1;
        format!("{:04}", x * HEX_PACKING + y)
    }

    /// Letter (A-P) of the subsector containing this hex.
    pub fn subsector(&self) -> Option<char> {
        if !self.is_valid() {
            return None;
        }
        let ssx = (i32::from(self.x) - 1) / SUBSECTOR_WIDTH;
        let ssy = (i32::from(self.y) - 1) / SUBSECTOR_HEIGHT;
        Some(SUBSECTOR_LETTERS[(ssy * SUBSECTORS_PER_SIDE + ssx) as usize])
    }
}

impl FromStr for Hex {
    type Err = LocationError;

    /// Strict parse. Blank text is the empty hex; anything other than four
    /// ASCII digits is an error.
    fn from_str(s: &str) -> LocationResult<Self> {
        if s.is_empty() {
            return Ok(Hex::EMPTY);
        }
        if s.len() != HEX_TOKEN_LEN || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LocationError::InvalidHex(s.to_string()));
        }
        let digits = s.as_bytes();
        let x = (digits[0] - b'0') * 10 + (digits[1] - b'0');
        let y = (digits[2] - b'0') * 10 + (digits[3] - b'0');
        Ok(Hex { x, y })
    }
}

impl From<i32> for Hex {
    fn from(packed: i32) -> Self {
        Hex::from_int(packed)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}", self.to_int())
    }
}

impl Serialize for Hex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Hex::parse(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_int_splits_column_and_row() {
        let hex = Hex::from_int(1910);
        assert_eq!(hex.column(), 19);
        assert_eq!(hex.row(), 10);
        assert_eq!(hex.to_int(), 1910);
    }

    #[test]
    fn from_int_out_of_range_is_empty() {
        assert_eq!(Hex::from_int(-1), Hex::EMPTY);
        assert_eq!(Hex::from_int(10000), Hex::EMPTY);
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(Hex::new(1, 1).to_string(), "0101");
        assert_eq!(Hex::from_int(1910).to_string(), "1910");
        assert_eq!(Hex::EMPTY.to_string(), "0000");
    }

    #[test]
    fn parse_canonical_token() {
        assert_eq!(Hex::parse("0140"), Hex::new(1, 40));
        assert_eq!(Hex::parse("3240"), Hex::new(32, 40));
    }

    #[test]
    fn parse_malformed_is_empty() {
        for text in ["12", "abcd", "", "12345", "19 0", "+191", "１９１０"] {
            let hex = Hex::parse(text);
            assert!(hex.is_empty(), "{:?} should parse to empty", text);
            assert!(!hex.is_valid(), "{:?} should be invalid", text);
        }
    }

    #[test]
    fn strict_parse_reports_malformed() {
        assert!(matches!("abcd".parse::<Hex>(), Err(LocationError::InvalidHex(_))));
        assert!(matches!("191".parse::<Hex>(), Err(LocationError::InvalidHex(_))));
        assert_eq!("".parse::<Hex>().unwrap(), Hex::EMPTY);
    }

    #[test]
    fn validity_follows_grid_bounds() {
        assert!(Hex::new(1, 1).is_valid());
        assert!(Hex::new(32, 40).is_valid());
        assert!(!Hex::new(0, 5).is_valid());
        assert!(!Hex::new(33, 1).is_valid());
        assert!(!Hex::new(1, 41).is_valid());
        assert!(!Hex::EMPTY.is_valid());
    }

    #[test]
    fn zero_hex_is_empty_but_out_of_grid_hex_is_not() {
        assert!(Hex::from_int(0).is_empty());
        assert!(!Hex::new(0, 5).is_empty());
        assert!(!Hex::new(0, 5).is_valid());
    }

    #[test]
    fn ordering_is_column_major() {
        assert!(Hex::new(1, 40) < Hex::new(2, 1));
        assert!(Hex::new(5, 3) < Hex::new(5, 4));
        assert!(Hex::new(6, 1) > Hex::new(5, 40));
    }

    #[test]
    fn subsector_string_wraps_per_subsector() {
        assert_eq!(Hex::new(1, 1).to_subsector_string(), "0101");
        assert_eq!(Hex::new(8, 10).to_subsector_string(), "0810");
        assert_eq!(Hex::new(9, 11).to_subsector_string(), "0101");
        assert_eq!(Hex::new(19, 10).to_subsector_string(), "0310");
        assert_eq!(Hex::new(32, 40).to_subsector_string(), "0810");
    }

    #[test]
    fn subsector_letters() {
        assert_eq!(Hex::new(1, 1).subsector(), Some('A'));
        assert_eq!(Hex::new(9, 1).subsector(), Some('B'));
        assert_eq!(Hex::new(1, 11).subsector(), Some('E'));
        assert_eq!(Hex::new(19, 10).subsector(), Some('C'));
        assert_eq!(Hex::new(32, 40).subsector(), Some('P'));
        assert_eq!(Hex::EMPTY.subsector(), None);
    }

    #[test]
    fn serde_uses_token() {
        let json = serde_json::to_string(&Hex::new(19, 10)).unwrap();
        assert_eq!(json, "\"1910\"");
        let hex: Hex = serde_json::from_str("\"0140\"").unwrap();
        assert_eq!(hex, Hex::new(1, 40));
        let bad: Hex = serde_json::from_str("\"zz\"").unwrap();
        assert!(bad.is_empty());
    }
}
