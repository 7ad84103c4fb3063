//! Composite sector + hex addresses.

use std::cmp::Ordering;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::errors::{LocationError, LocationResult};
use super::hex::Hex;
use super::position::SectorCoordinate;
use super::resolver::SectorNameResolver;

/// A point on the map: a sector cell plus a hex inside it.
///
/// `Empty` stands for "no location" and is distinct from a location whose
/// sector and hex happen to be zero. It orders before every located value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Location {
    #[default]
    Empty,
    At { sector: SectorCoordinate, hex: Hex },
}

impl Location {
    pub const EMPTY: Location = Location::Empty;

    /// Locate a hex within a sector. Accepts a [`Hex`] or its packed integer form.
    pub fn new(sector: SectorCoordinate, hex: impl Into<Hex>) -> Self {
        Location::At {
            sector,
            hex: hex.into(),
        }
    }

    /// Build a location from its textual parts, as found in data files.
    /// See [`LocationBuilder::build`] for how missing or bad parts degrade.
    pub fn from_text<R>(sector_name: Option<&str>, hex_text: Option<&str>, resolver: &R) -> Self
    where
        R: SectorNameResolver + ?Sized,
    {
        let mut builder = LocationBuilder::new();
        if let Some(name) = sector_name {
            builder = builder.sector_name(name);
        }
        if let Some(text) = hex_text {
            builder = builder.hex_name(text);
        }
        builder.build(resolver)
    }

    pub fn sector(&self) -> Option<SectorCoordinate> {
        match self {
            Location::Empty => None,
            Location::At { sector, .. } => Some(*sector),
        }
    }

    pub fn hex(&self) -> Option<Hex> {
        match self {
            Location::Empty => None,
            Location::At { hex, .. } => Some(*hex),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Location::Empty)
    }

    /// Any sector is acceptable; only the hex is checked against the grid.
    pub fn is_valid(&self) -> bool {
        self.hex().is_some_and(|hex| hex.is_valid())
    }

    /// Canonical hex token, "0000" for an empty location.
    pub fn hex_string(&self) -> String {
        self.hex().unwrap_or(Hex::EMPTY).to_string()
    }

    /// Subsector-relative hex token.
    pub fn subsector_hex_string(&self) -> String {
        self.hex().unwrap_or(Hex::EMPTY).to_subsector_string()
    }

    /// Sector-major ordering: any difference in sector outranks any
    /// difference in hex. Empty sorts first.
    pub fn cmp_sector_major(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Location::Empty, Location::Empty) => Ordering::Equal,
            (Location::Empty, Location::At { .. }) => Ordering::Less,
            (Location::At { .. }, Location::Empty) => Ordering::Greater,
            (
                Location::At { sector: sa, hex: ha },
                Location::At { sector: sb, hex: hb },
            ) => sa.cmp(sb).then_with(|| ha.cmp(hb)),
        }
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_sector_major(other)
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Stages the textual parts of a location before resolving them.
///
/// Each part may be supplied once; a second assignment is ignored.
#[derive(Debug, Clone, Default)]
pub struct LocationBuilder {
    sector_name: Option<String>,
    hex_name: Option<String>,
}

impl LocationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sector_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        match &self.sector_name {
            Some(existing) => warn!("sector already set to '{}', ignoring '{}'", existing, name),
            None => self.sector_name = Some(name),
        }
        self
    }

    pub fn hex_name(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        match &self.hex_name {
            Some(existing) => warn!("hex already set to '{}', ignoring '{}'", existing, text),
            None => self.hex_name = Some(text),
        }
        self
    }

    /// Resolve the staged parts, degrading instead of failing.
    ///
    /// - an unknown sector name yields [`Location::Empty`]
    /// - malformed hex text becomes [`Hex::EMPTY`]
    /// - no sector name and an empty hex yields [`Location::Empty`]
    /// - a missing sector name places the hex in [`SectorCoordinate::ORIGIN`]
    pub fn build<R>(&self, resolver: &R) -> Location
    where
        R: SectorNameResolver + ?Sized,
    {
        let hex = self.hex_name.as_deref().map(Hex::parse).unwrap_or_default();
        let sector = match self.sector_name.as_deref() {
            Some(name) => match resolver.resolve(name) {
                Some(sector) => sector,
                None => {
                    debug!("sector not found: {}", name);
                    return Location::Empty;
                }
            },
            None if hex.is_empty() => return Location::Empty,
            None => SectorCoordinate::ORIGIN,
        };
        Location::At { sector, hex }
    }

    /// Resolve the staged parts, reporting unknown sectors and malformed hexes.
    pub fn try_build<R>(&self, resolver: &R) -> LocationResult<Location>
    where
        R: SectorNameResolver + ?Sized,
    {
        let hex = match self.hex_name.as_deref() {
            Some(text) => text.parse::<Hex>()?,
            None => Hex::EMPTY,
        };
        let sector = match self.sector_name.as_deref() {
            Some(name) => resolver
                .resolve(name)
                .ok_or_else(|| LocationError::UnknownSector(name.to_string()))?,
            None if hex.is_empty() => return Ok(Location::Empty),
            None => SectorCoordinate::ORIGIN,
        };
        Ok(Location::At { sector, hex })
    }
}

/// Serialized form of a location: the sector by name and the hex as a token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    #[serde(rename = "Sector", default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(rename = "Hex", default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
}

impl LocationRecord {
    pub fn new(sector: impl Into<String>, hex: impl Into<String>) -> Self {
        LocationRecord {
            sector: Some(sector.into()),
            hex: Some(hex.into()),
        }
    }

    pub fn resolve<R>(&self, resolver: &R) -> Location
    where
        R: SectorNameResolver + ?Sized,
    {
        self.builder().build(resolver)
    }

    pub fn try_resolve<R>(&self, resolver: &R) -> LocationResult<Location>
    where
        R: SectorNameResolver + ?Sized,
    {
        self.builder().try_build(resolver)
    }

    fn builder(&self) -> LocationBuilder {
        let mut builder = LocationBuilder::new();
        if let Some(name) = &self.sector {
            builder = builder.sector_name(name.as_str());
        }
        if let Some(text) = &self.hex {
            builder = builder.hex_name(text.as_str());
        }
        builder
    }
}
