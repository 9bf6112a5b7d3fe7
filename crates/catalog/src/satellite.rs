//! Satellite records.

use serde::Serialize;

/// Stable identifier for a tracked satellite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SatelliteId(u32);

impl SatelliteId {
    /// Creates a satellite ID from its numeric value.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SatelliteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SatelliteId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A single entry on the mission board.
///
/// Records are immutable once built; the fields are only reachable through
/// the accessors below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Satellite {
    id: SatelliteId,
    name: String,
    launch_date: String,
    orbit_type: String,
    status: String,
}

impl Satellite {
    /// Creates a new satellite record.
    ///
    /// `launch_date` is an ISO calendar date (`YYYY-MM-DD`); `orbit_type` and
    /// `status` are free-text categories.
    pub fn new(
        id: impl Into<SatelliteId>,
        name: impl Into<String>,
        launch_date: impl Into<String>,
        orbit_type: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            launch_date: launch_date.into(),
            orbit_type: orbit_type.into(),
            status: status.into(),
        }
    }

    pub fn id(&self) -> SatelliteId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn launch_date(&self) -> &str {
        &self.launch_date
    }

    pub fn orbit_type(&self) -> &str {
        &self.orbit_type
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}
