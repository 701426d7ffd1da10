//! Per-checkpoint station selection.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::FromPrimitive;

use crate::catalog::StationIndex;
use crate::geo::Coordinate;

use super::config::{FuelPolicy, TripConfig};
use super::segment::Checkpoint;
use super::trip::TripError;

/// Decimal places kept for purchased gallons.
const GALLON_PRECISION: u32 = 4;

/// A refueling stop in the final plan.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelStop {
    /// Distance from the route start where the stop is due (miles).
    pub mile_marker: f64,

    /// Point on the route at the mile marker.
    pub location: Coordinate,

    pub station_id: String,

    pub station_name: String,

    /// Where the chosen station actually is.
    pub station_coordinate: Coordinate,

    /// Detour from the route to the station (great-circle miles).
    pub station_distance_miles: f64,

    pub price_per_gallon: Decimal,

    /// Fuel bought at this stop. Never more than the tank capacity.
    pub gallons: Decimal,

    /// `gallons * price_per_gallon`, unrounded.
    pub cost: Decimal,
}

/// Chooses the station and fuel amount for each checkpoint.
pub struct StopSelector<'a> {
    index: &'a StationIndex,
    config: &'a TripConfig,
}

impl<'a> StopSelector<'a> {
    pub fn new(index: &'a StationIndex, config: &'a TripConfig) -> Self {
        Self { index, config }
    }

    /// Pick the cheapest station within range of `checkpoint`.
    ///
    /// `leg_miles` is the distance the fuel bought here must cover before the
    /// next stop (or the end of the route); it only matters for
    /// [`FuelPolicy::Prorated`]. Fails with [`TripError::NoStationInRange`]
    /// when no station is close enough; there is no fallback.
    pub fn select(&self, checkpoint: &Checkpoint, leg_miles: f64) -> Result<FuelStop, TripError> {
        let nearby = self
            .index
            .nearest_cheapest(checkpoint.coordinate, self.config.search_radius_miles)
            .ok_or(TripError::NoStationInRange {
                mile_marker: checkpoint.mile_marker,
                coordinate: checkpoint.coordinate,
            })?;

        let gallons = self.gallons_for(leg_miles)?;
        let station = nearby.station;
        let cost = gallons
            .checked_mul(station.price_per_gallon)
            .ok_or_else(|| TripError::InvalidConfig(format!("cost of {gallons} gallons overflows")))?;

        Ok(FuelStop {
            mile_marker: checkpoint.mile_marker,
            location: checkpoint.coordinate,
            station_id: station.id.clone(),
            station_name: station.name.clone(),
            station_coordinate: station.coordinate,
            station_distance_miles: nearby.distance_miles,
            price_per_gallon: station.price_per_gallon,
            gallons,
            cost,
        })
    }

    /// Truncated rather than rounded, so the purchase never exceeds the tank.
    fn gallons_for(&self, leg_miles: f64) -> Result<Decimal, TripError> {
        let tank = self.config.tank_capacity_gallons;
        let gallons = match self.config.fuel_policy {
            FuelPolicy::FullTank => tank,
            FuelPolicy::Prorated => (leg_miles.max(0.0) / self.config.mpg).min(tank),
        };

        Decimal::from_f64(gallons)
            .map(|g| g.round_dp_with_strategy(GALLON_PRECISION, RoundingStrategy::ToZero))
            .ok_or_else(|| TripError::InvalidConfig(format!("cannot represent {gallons} gallons")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Station;

    fn coord(lon: f64, lat: f64) -> Coordinate {
        Coordinate::new(lon, lat).unwrap()
    }

    fn index() -> StationIndex {
        StationIndex::load(vec![
            Station::new("A", "Alpha", coord(0.0, 0.2), Decimal::new(3999, 3)).unwrap(),
            Station::new("B", "Bravo", coord(0.0, -0.2), Decimal::new(3459, 3)).unwrap(),
        ])
        .unwrap()
    }

    fn checkpoint(lon: f64, lat: f64) -> Checkpoint {
        Checkpoint {
            mile_marker: 500.0,
            coordinate: coord(lon, lat),
        }
    }

    #[test]
    fn full_tank_buys_capacity() {
        let index = index();
        let config = TripConfig::default();
        let selector = StopSelector::new(&index, &config);

        let stop = selector.select(&checkpoint(0.0, 0.0), 120.0).unwrap();

        assert_eq!(stop.station_id, "B");
        assert_eq!(stop.station_name, "Bravo");
        assert_eq!(stop.gallons, Decimal::from(50));
        assert_eq!(stop.cost, Decimal::new(172950, 3));
        assert_eq!(stop.mile_marker, 500.0);
        assert!(stop.station_distance_miles > 13.0 && stop.station_distance_miles < 14.0);
    }

    #[test]
    fn prorated_buys_leg_fuel() {
        let index = index();
        let config = TripConfig::default().with_fuel_policy(FuelPolicy::Prorated);
        let selector = StopSelector::new(&index, &config);

        let stop = selector.select(&checkpoint(0.0, 0.0), 24.12).unwrap();

        assert_eq!(stop.gallons, Decimal::new(2412, 3));
        assert_eq!(stop.cost, Decimal::new(2412, 3) * Decimal::new(3459, 3));
    }

    #[test]
    fn prorated_never_exceeds_tank() {
        let index = index();
        let config = TripConfig::default().with_fuel_policy(FuelPolicy::Prorated);
        let selector = StopSelector::new(&index, &config);

        let stop = selector.select(&checkpoint(0.0, 0.0), 10_000.0).unwrap();
        assert_eq!(stop.gallons, Decimal::from(50));
    }

    #[test]
    fn fractional_tank_is_never_overfilled() {
        let index = index();
        let tank = 500.0 / 3.0;
        let tank_decimal = Decimal::from_f64(tank).unwrap();

        for policy in [FuelPolicy::FullTank, FuelPolicy::Prorated] {
            let config = TripConfig::new(500.0, 3.0, tank, 50.0).with_fuel_policy(policy);
            let selector = StopSelector::new(&index, &config);

            let stop = selector.select(&checkpoint(0.0, 0.0), 500.0).unwrap();
            assert!(stop.gallons <= tank_decimal, "{policy:?}: {} > {tank_decimal}", stop.gallons);
            assert_eq!(stop.gallons, Decimal::new(1666666, 4));
        }
    }

    #[test]
    fn huge_tank_cost_overflow_is_an_error() {
        let index = index();
        let config = TripConfig::new(500.0, 10.0, 1e28, 50.0);
        let selector = StopSelector::new(&index, &config);

        let err = selector.select(&checkpoint(0.0, 0.0), 500.0).unwrap_err();
        assert!(matches!(err, TripError::InvalidConfig(_)));
    }

    #[test]
    fn no_station_in_range_is_an_error() {
        let index = index();
        let config = TripConfig::default();
        let selector = StopSelector::new(&index, &config);

        let err = selector.select(&checkpoint(20.0, 20.0), 500.0).unwrap_err();
        match err {
            TripError::NoStationInRange {
                mile_marker,
                coordinate,
            } => {
                assert_eq!(mile_marker, 500.0);
                assert_eq!(coordinate, coord(20.0, 20.0));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
