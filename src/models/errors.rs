use thiserror::Error;

use crate::models::position::WorldCoordinates;

/// Failures raised by the strict parsing and lookup paths.
///
/// The lenient paths (`Hex::parse`, `LocationBuilder::build`) never return
/// these; they degrade to the empty states instead.
#[derive(Debug, Error)]
pub enum LocationError {
    /// Hex text that is not a four digit column-row token
    #[error("'{0}' is not a valid hex")]
    InvalidHex(String),
    /// Sector name the resolver does not know
    #[error("sector not found: {0}")]
    UnknownSector(String),
    /// Neighbor direction outside 0-5
    #[error("invalid hex direction {0}, expected 0-5")]
    InvalidDirection(u8),
    /// Step off the edge of the world grid
    #[error("no hex beyond world coordinates {0}")]
    OffGrid(WorldCoordinates),
    /// Malformed sector catalog contents
    #[error("catalog error: {0}")]
    Catalog(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for Results using LocationError
pub type LocationResult<T> = Result<T, LocationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(
            LocationError::InvalidHex("19x0".to_string()).to_string(),
            "'19x0' is not a valid hex"
        );
        assert_eq!(
            LocationError::UnknownSector("Nowhere".to_string()).to_string(),
            "sector not found: Nowhere"
        );
        assert_eq!(
            LocationError::OffGrid(WorldCoordinates::new(i64::MAX, 0)).to_string(),
            format!("no hex beyond world coordinates {},0", i64::MAX)
        );
    }

    #[test]
    fn io_errors_convert() {
        let err: LocationError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, LocationError::Io(_)));
    }
}
