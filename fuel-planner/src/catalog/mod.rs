//! Fuel station catalog.
//!
//! Stations are loaded once from a pre-geocoded CSV file at startup and
//! held in an immutable [`StationIndex`] that answers radius queries.

mod error;
mod index;
mod loader;
mod station;

pub use error::CatalogError;
pub use index::{NearbyStation, StationIndex};
pub use loader::{LoadedCatalog, StationCatalog};
pub use station::Station;
