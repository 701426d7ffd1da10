//! In-memory station index.

use std::cmp::Ordering;

use tracing::debug;

use crate::geo::{Coordinate, great_circle_miles};

use super::error::CatalogError;
use super::station::Station;

/// A station found by a radius query, with its distance from the query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyStation<'a> {
    pub station: &'a Station,

    /// Great-circle distance from the query center in miles.
    pub distance_miles: f64,

    /// Position of the station in the catalog, used as the final tie-break.
    catalog_pos: usize,
}

impl NearbyStation<'_> {
    /// Ordering used to pick the best station: cheapest first, then closest,
    /// then earliest in the catalog.
    fn rank(&self, other: &Self) -> Ordering {
        self.station
            .price_per_gallon
            .cmp(&other.station.price_per_gallon)
            .then_with(|| self.distance_miles.total_cmp(&other.distance_miles))
            .then_with(|| self.catalog_pos.cmp(&other.catalog_pos))
    }
}

/// Read-only collection of fuel stations.
///
/// Built once at startup; safe to share between requests without locking.
/// Queries are a linear scan, which is fast enough for catalogs of a few
/// thousand stations.
#[derive(Debug, Clone)]
pub struct StationIndex {
    stations: Vec<Station>,
}

impl StationIndex {
    /// Build an index from a station list.
    ///
    /// Fails with [`CatalogError::EmptyCatalog`] if the list is empty.
    pub fn load(stations: Vec<Station>) -> Result<Self, CatalogError> {
        if stations.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        debug!(count = stations.len(), "built station index");
        Ok(Self { stations })
    }

    /// All stations within `radius_miles` of `center`, best first.
    pub fn within_radius(&self, center: Coordinate, radius_miles: f64) -> Vec<NearbyStation<'_>> {
        let mut nearby: Vec<_> = self.scan(center, radius_miles).collect();
        nearby.sort_by(|a, b| a.rank(b));
        nearby
    }

    /// The cheapest station within `radius_miles` of `center`.
    ///
    /// Ties on price go to the closer station, then to the one listed first
    /// in the catalog. Returns `None` if nothing is in range.
    pub fn nearest_cheapest(
        &self,
        center: Coordinate,
        radius_miles: f64,
    ) -> Option<NearbyStation<'_>> {
        self.scan(center, radius_miles).min_by(|a, b| a.rank(b))
    }

    /// Number of stations in the index.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false for a successfully loaded index.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Iterate over stations in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    fn scan(
        &self,
        center: Coordinate,
        radius_miles: f64,
    ) -> impl Iterator<Item = NearbyStation<'_>> {
        self.stations
            .iter()
            .enumerate()
            .filter_map(move |(catalog_pos, station)| {
                let distance_miles = great_circle_miles(center, station.coordinate);
                (distance_miles <= radius_miles).then_some(NearbyStation {
                    station,
                    distance_miles,
                    catalog_pos,
                })
            })
    }
}
