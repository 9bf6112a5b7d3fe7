//! Serializable view of the catalog.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::Satellite;

/// The document served at `/satellites`.
///
/// Borrows the records from the catalog, so building one never clones the
/// data set. `total_count` always equals the number of records.
#[derive(Debug, Serialize)]
pub struct SatelliteListing<'a> {
    satellites: &'a [Satellite],
    total_count: usize,
    last_updated: DateTime<Utc>,
}

impl<'a> SatelliteListing<'a> {
    pub fn new(satellites: &'a [Satellite], last_updated: DateTime<Utc>) -> Self {
        Self {
            satellites,
            total_count: satellites.len(),
            last_updated,
        }
    }

    pub fn satellites(&self) -> &'a [Satellite] {
        self.satellites
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Renders the listing as pretty-printed JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
