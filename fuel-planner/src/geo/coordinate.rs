//! Coordinate value type.

use std::fmt;

/// Error returned when constructing a coordinate from invalid degrees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate: {reason}")]
pub struct InvalidCoordinate {
    reason: &'static str,
}

/// A point on the Earth's surface as (longitude, latitude) in degrees.
///
/// Both components are finite, longitude is within [-180, 180] and
/// latitude within [-90, 90]. Any `Coordinate` value is valid by
/// construction.
///
/// # Examples
///
/// ```
/// use fuel_planner::geo::Coordinate;
///
/// let la = Coordinate::new(-118.2437, 34.0522).unwrap();
/// assert_eq!(la.lat(), 34.0522);
///
/// assert!(Coordinate::new(-200.0, 0.0).is_err());
/// assert!(Coordinate::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinate {
    lon: f64,
    lat: f64,
}

impl Coordinate {
    /// Create a coordinate from longitude and latitude in degrees.
    pub fn new(lon: f64, lat: f64) -> Result<Self, InvalidCoordinate> {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(InvalidCoordinate {
                reason: "components must be finite",
            });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidCoordinate {
                reason: "longitude must be within [-180, 180]",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinate {
                reason: "latitude must be within [-90, 90]",
            });
        }
        Ok(Self { lon, lat })
    }

    /// Create a coordinate from a (latitude, longitude) pair.
    pub fn from_lat_lon(lat: f64, lon: f64) -> Result<Self, InvalidCoordinate> {
        Self::new(lon, lat)
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Bit patterns of both components, usable as a hash key.
    pub fn to_bits(&self) -> (u64, u64) {
        (self.lon.to_bits(), self.lat.to_bits())
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {})", self.lon, self.lat)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lon)
    }
}
