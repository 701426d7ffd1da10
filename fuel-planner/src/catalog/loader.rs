//! CSV station catalog loader.
//!
//! Reads the pre-geocoded fuel price file. Rows are validated into
//! [`Station`] records; rows with missing or malformed coordinates or a
//! non-positive price are skipped and counted rather than trusted later.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, warn};

use crate::geo::Coordinate;

use super::error::CatalogError;
use super::index::StationIndex;
use super::station::Station;

/// One raw row of the catalog file. Every field is optional so that a bad
/// value skips the row instead of aborting the load.
#[derive(Debug, Deserialize)]
struct StationRecord {
    #[serde(rename = "OPIS Truckstop ID")]
    id: Option<String>,
    #[serde(rename = "Truckstop Name")]
    name: Option<String>,
    #[serde(rename = "Address")]
    address: Option<String>,
    #[serde(rename = "City")]
    city: Option<String>,
    #[serde(rename = "State")]
    state: Option<String>,
    #[serde(rename = "Retail Price")]
    price: Option<String>,
    #[serde(rename = "Latitude")]
    latitude: Option<String>,
    #[serde(rename = "Longitude")]
    longitude: Option<String>,
}

impl StationRecord {
    /// Validate the row into a station.
    fn into_station(self) -> Result<Station, &'static str> {
        let lat = parse_field::<f64>(self.latitude.as_deref()).ok_or("missing latitude")?;
        let lon = parse_field::<f64>(self.longitude.as_deref()).ok_or("missing longitude")?;
        let coordinate = Coordinate::from_lat_lon(lat, lon).map_err(|_| "invalid coordinate")?;

        let price = parse_field::<Decimal>(self.price.as_deref()).ok_or("missing price")?;

        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Unknown".to_string());

        let station = Station::new(self.id.unwrap_or_default().trim(), name, coordinate, price)
            .ok_or("price must be positive")?;

        Ok(station.with_location(
            self.address.unwrap_or_default().trim(),
            self.city.unwrap_or_default().trim(),
            self.state.unwrap_or_default().trim(),
        ))
    }
}

fn parse_field<T: FromStr>(value: Option<&str>) -> Option<T> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    value.parse().ok()
}

/// Result of loading a catalog: the index plus how many rows were rejected.
#[derive(Debug)]
pub struct LoadedCatalog {
    pub index: StationIndex,
    pub skipped: usize,
}

/// Loader for the geocoded station CSV.
pub struct StationCatalog;

impl StationCatalog {
    /// Load a catalog file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<LoadedCatalog, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let loaded = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            stations = loaded.index.len(),
            skipped = loaded.skipped,
            "loaded station catalog"
        );
        Ok(loaded)
    }

    /// Load a catalog from any CSV source with a header row.
    pub fn from_reader(reader: impl Read) -> Result<LoadedCatalog, CatalogError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
        // Surface a broken header as an error rather than as skipped rows
        rdr.headers()?;

        let mut stations = Vec::new();
        let mut skipped = 0;

        for (row, result) in rdr.deserialize::<StationRecord>().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    warn!(row, error = %e, "skipping unreadable catalog row");
                    skipped += 1;
                    continue;
                }
            };

            match record.into_station() {
                Ok(station) => stations.push(station),
                Err(reason) => {
                    warn!(row, reason, "skipping invalid catalog row");
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            warn!(skipped, kept = stations.len(), "catalog rows rejected");
        }

        let index = StationIndex::load(stations)?;
        Ok(LoadedCatalog { index, skipped })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const HEADER: &str = "OPIS Truckstop ID,Truckstop Name,Address,City,State,Rack ID,Retail Price,Latitude,Longitude\n";

    #[test]
    fn loads_valid_rows() {
        let csv = format!(
            "{HEADER}\
             7,WOODSHED OF BIG CABIN,\"I-44, EXIT 283 & US-69\",Big Cabin,OK,307,3.00733333,36.5389,-95.2183\n\
             33,KWIK TRIP #796,I-94 & EXIT 143,Tomah,WI,420,3.287,43.9789,-90.5040\n"
        );

        let loaded = StationCatalog::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(loaded.index.len(), 2);
        assert_eq!(loaded.skipped, 0);

        let first = loaded.index.iter().next().unwrap();
        assert_eq!(first.id, "7");
        assert_eq!(first.name, "WOODSHED OF BIG CABIN");
        assert_eq!(first.address, "I-44, EXIT 283 & US-69");
        assert_eq!(first.state, "OK");
        assert_eq!(first.price_per_gallon, Decimal::from_str("3.00733333").unwrap());
        assert_eq!(first.coordinate.lat(), 36.5389);
        assert_eq!(first.coordinate.lon(), -95.2183);
    }

    #[test]
    fn skips_invalid_rows() {
        let csv = format!(
            "{HEADER}\
             1,Good,Addr,City,TX,1,3.50,32.0,-97.0\n\
             2,No Coordinates,Addr,City,TX,1,3.50,,\n\
             3,Bad Latitude,Addr,City,TX,1,3.50,95.0,-97.0\n\
             4,Zero Price,Addr,City,TX,1,0,32.0,-97.0\n\
             5,Garbage Price,Addr,City,TX,1,abc,32.0,-97.0\n\
             6,Negative Price,Addr,City,TX,1,-1.25,32.0,-97.0\n"
        );

        let loaded = StationCatalog::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(loaded.index.len(), 1);
        assert_eq!(loaded.skipped, 5);
    }

    #[test]
    fn missing_name_defaults_to_unknown() {
        let csv = format!("{HEADER}9,,Addr,City,TX,1,3.10,32.0,-97.0\n");
        let loaded = StationCatalog::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(loaded.index.iter().next().unwrap().name, "Unknown");
    }

    #[test]
    fn all_rows_invalid_is_empty_catalog() {
        let csv = format!("{HEADER}1,Bad,Addr,City,TX,1,3.50,,\n");
        assert!(matches!(
            StationCatalog::from_reader(csv.as_bytes()),
            Err(CatalogError::EmptyCatalog)
        ));
    }

    #[test]
    fn header_only_is_empty_catalog() {
        assert!(matches!(
            StationCatalog::from_reader(HEADER.as_bytes()),
            Err(CatalogError::EmptyCatalog)
        ));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fuel-price-geocoded.csv");
        std::fs::write(&path, format!("{HEADER}1,Good,Addr,City,TX,1,3.50,32.0,-97.0\n")).unwrap();

        let loaded = StationCatalog::from_path(&path).unwrap();
        assert_eq!(loaded.index.len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = StationCatalog::from_path("/nonexistent/stations.csv");
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
