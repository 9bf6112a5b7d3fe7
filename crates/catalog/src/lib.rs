//! Satellite catalog for the mission board dashboard.
//!
//! This crate owns the fixed set of tracked satellites and renders it as the
//! JSON document served by the API:
//! - `Satellite` records with a stable `SatelliteId`
//! - `SatelliteCatalog`, the ordered, read-only collection
//! - `SatelliteProvider`, the seam the HTTP layer reads through

pub mod catalog;
pub mod error;
pub mod listing;
pub mod satellite;

pub use catalog::{SatelliteCatalog, SatelliteProvider};
pub use error::{CatalogError, Result};
pub use listing::SatelliteListing;
pub use satellite::{Satellite, SatelliteId};
