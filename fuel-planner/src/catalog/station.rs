//! Station record.

use rust_decimal::Decimal;

use crate::geo::Coordinate;

/// A fuel station with a known location and retail price.
///
/// Stations are validated when the catalog is loaded: the coordinate is in
/// range and the price is strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Catalog identifier (OPIS truckstop ID).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Street address or highway exit.
    pub address: String,

    pub city: String,

    pub state: String,

    /// Geocoded location.
    pub coordinate: Coordinate,

    /// Retail price per gallon.
    pub price_per_gallon: Decimal,
}

impl Station {
    /// Create a station with only the fields the planner needs.
    ///
    /// Returns `None` if the price is not strictly positive.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        coordinate: Coordinate,
        price_per_gallon: Decimal,
    ) -> Option<Self> {
        if price_per_gallon <= Decimal::ZERO {
            return None;
        }
        Some(Self {
            id: id.into(),
            name: name.into(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            coordinate,
            price_per_gallon,
        })
    }

    /// Set the postal location fields.
    pub fn with_location(
        mut self,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        self.address = address.into();
        self.city = city.into();
        self.state = state.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord() -> Coordinate {
        Coordinate::new(-97.0, 35.0).unwrap()
    }

    #[test]
    fn rejects_non_positive_price() {
        assert!(Station::new("1", "Zero", coord(), Decimal::ZERO).is_none());
        assert!(Station::new("2", "Negative", coord(), Decimal::new(-100, 2)).is_none());
    }

    #[test]
    fn with_location_sets_fields() {
        let station = Station::new("7", "Big Rig Stop", coord(), Decimal::new(3599, 3))
            .unwrap()
            .with_location("I-40, EXIT 127", "Oklahoma City", "OK");

        assert_eq!(station.address, "I-40, EXIT 127");
        assert_eq!(station.city, "Oklahoma City");
        assert_eq!(station.state, "OK");
        assert_eq!(station.price_per_gallon.to_string(), "3.599");
    }
}
