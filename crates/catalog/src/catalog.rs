//! The fixed satellite collection and the provider seam over it.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::{CatalogError, Result, Satellite, SatelliteId, SatelliteListing};

/// Read access to a satellite data source.
///
/// The HTTP layer only depends on this trait, so alternate sources can be
/// injected without touching the routes.
pub trait SatelliteProvider: Send + Sync + 'static {
    /// Renders the full listing as a JSON document stamped with the current
    /// time.
    fn to_json(&self) -> Result<String>;
}

/// Operational satellites shown on the mission board, in display order:
/// id, name, launch date, orbit type, status.
const MISSION_BOARD: [(u32, &str, &str, &str, &str); 10] = [
    (1, "International Space Station", "1998-11-20", "Low Earth Orbit", "Active"),
    (2, "Hubble Space Telescope", "1990-04-24", "Low Earth Orbit", "Active"),
    (3, "James Webb Space Telescope", "2021-12-25", "Sun-Earth L2", "Active"),
    (4, "Starlink-1007", "2019-05-23", "Low Earth Orbit", "Active"),
    (5, "GPS III SV01", "2018-12-23", "Medium Earth Orbit", "Active"),
    (6, "Sentinel-1A", "2014-04-03", "Sun-synchronous", "Active"),
    (7, "GOES-16", "2016-11-19", "Geostationary", "Active"),
    (8, "Terra", "1999-12-18", "Sun-synchronous", "Active"),
    (9, "Aqua", "2002-05-04", "Sun-synchronous", "Active"),
    (10, "Landsat 8", "2013-02-11", "Sun-synchronous", "Active"),
];

/// Ordered, read-only collection of tracked satellites.
///
/// Ids are unique and the collection is never empty. Output order is
/// insertion order.
#[derive(Debug, Clone)]
pub struct SatelliteCatalog {
    satellites: Vec<Satellite>,
}

impl SatelliteCatalog {
    /// Creates the catalog with the mission board's operational satellites.
    pub fn new() -> Self {
        let satellites: Vec<Satellite> = MISSION_BOARD
            .iter()
            .map(|&(id, name, launch_date, orbit_type, status)| {
                Satellite::new(id, name, launch_date, orbit_type, status)
            })
            .collect();
        tracing::debug!(count = satellites.len(), "initialized satellite catalog");
        Self { satellites }
    }

    /// Builds a catalog from arbitrary records.
    ///
    /// Fails if `satellites` is empty or if any id appears twice.
    pub fn from_records(satellites: Vec<Satellite>) -> Result<Self> {
        if satellites.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(satellites.len());
        for sat in &satellites {
            if !seen.insert(sat.id()) {
                return Err(CatalogError::DuplicateId(sat.id()));
            }
        }

        Ok(Self { satellites })
    }

    /// Returns the records in insertion order.
    pub fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.satellites.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.satellites.is_empty()
    }

    /// Looks up a record by id.
    pub fn get(&self, id: SatelliteId) -> Option<&Satellite> {
        self.satellites.iter().find(|s| s.id() == id)
    }

    /// Builds the listing view stamped with `at`.
    pub fn listing_at(&self, at: DateTime<Utc>) -> SatelliteListing<'_> {
        SatelliteListing::new(&self.satellites, at)
    }
}

impl Default for SatelliteCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl SatelliteProvider for SatelliteCatalog {
    fn to_json(&self) -> Result<String> {
        self.listing_at(Utc::now()).to_json()
    }
}
