//! In-memory sector name table.
//!
//! Callers load the names they know (typically from a JSON file) and hand
//! the catalog to location construction as its [`SectorNameResolver`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::models::errors::{LocationError, LocationResult};
use crate::models::position::SectorCoordinate;
use crate::models::resolver::SectorNameResolver;

/// One sector as listed in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    pub x: i32,
    pub y: i32,
}

impl SectorEntry {
    pub fn new(name: impl Into<String>, x: i32, y: i32) -> Self {
        SectorEntry {
            name: name.into(),
            abbreviation: None,
            aliases: Vec::new(),
            x,
            y,
        }
    }

    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }

    pub fn location(&self) -> SectorCoordinate {
        SectorCoordinate::new(self.x, self.y)
    }
}

/// Case-insensitive sector name lookup in both directions.
///
/// The first sector registered at a location wins, as does the first
/// sector to claim a given name.
#[derive(Debug, Default)]
pub struct SectorCatalog {
    by_name: HashMap<String, SectorCoordinate>,
    by_location: HashMap<SectorCoordinate, String>,
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl SectorCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = SectorEntry>) -> LocationResult<Self> {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.add(entry)?;
        }
        Ok(catalog)
    }

    /// Parse a JSON array of [`SectorEntry`] values.
    pub fn from_json_str(json: &str) -> LocationResult<Self> {
        let entries: Vec<SectorEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn load(path: impl AsRef<Path>) -> LocationResult<Self> {
        let path = path.as_ref();
        let catalog = Self::from_json_str(&fs::read_to_string(path)?)?;
        debug!("loaded {} sectors from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Register a sector under its name, its name without spaces, its
    /// abbreviation and any aliases.
    ///
    /// Returns `Ok(false)` when the location is already taken.
    pub fn add(&mut self, entry: SectorEntry) -> LocationResult<bool> {
        if entry.name.trim().is_empty() {
            return Err(LocationError::Catalog(format!(
                "sector at {} has no name",
                entry.location()
            )));
        }

        let location = entry.location();
        if let Some(existing) = self.by_location.get(&location) {
            warn!(
                "sector '{}' at {} already holds '{}', skipping",
                existing, location, entry.name
            );
            return Ok(false);
        }
        self.by_location.insert(location, entry.name.clone());

        let compact = entry.name.replace(' ', "");
        let names = std::iter::once(entry.name.as_str())
            .chain(std::iter::once(compact.as_str()))
            .chain(entry.abbreviation.as_deref())
            .chain(entry.aliases.iter().map(String::as_str));
        for name in names {
            self.register(name, location);
        }
        Ok(true)
    }

    fn register(&mut self, name: &str, location: SectorCoordinate) {
        let key = name_key(name);
        if key.is_empty() {
            return;
        }
        match self.by_name.get(&key) {
            Some(existing) if *existing != location => {
                warn!("name '{}' already refers to {}, not {}", name, existing, location)
            }
            Some(_) => {}
            None => {
                self.by_name.insert(key, location);
            }
        }
    }

    /// Primary name of the sector at `location`.
    pub fn name_at(&self, location: SectorCoordinate) -> Option<&str> {
        self.by_location.get(&location).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_location.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_location.is_empty()
    }
}

impl SectorNameResolver for SectorCatalog {
    fn resolve(&self, name: &str) -> Option<SectorCoordinate> {
        self.by_name.get(&name_key(name)).copied()
    }
}
