//! Data transfer objects for web requests and responses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::geo::{Coordinate, InvalidCoordinate};
use crate::planner::{FuelPolicy, FuelStop, TripConfig, TripResult};

/// A point given as latitude/longitude in degrees.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn to_coordinate(self) -> Result<Coordinate, InvalidCoordinate> {
        Coordinate::from_lat_lon(self.lat, self.lon)
    }
}

/// Request to plan fuel stops.
#[derive(Debug, Deserialize)]
pub struct FuelOptimizerRequest {
    /// Trip origin
    pub start: Option<LatLon>,

    /// Trip destination
    pub end: Option<LatLon>,

    /// Vehicle miles per gallon
    pub mpg: Option<f64>,

    /// Miles between refueling stops
    pub range: Option<f64>,

    /// Station search radius in miles
    pub radius: Option<f64>,

    /// Tank size in gallons; defaults to `range / mpg` when either of those
    /// is given
    pub tank_capacity: Option<f64>,

    pub fuel_policy: Option<FuelPolicy>,
}

impl FuelOptimizerRequest {
    /// Build the trip configuration, filling gaps from `defaults`.
    pub fn trip_config(&self, defaults: &TripConfig) -> TripConfig {
        let interval_miles = self.range.unwrap_or(defaults.interval_miles);
        let mpg = self.mpg.unwrap_or(defaults.mpg);

        let tank_capacity_gallons = match self.tank_capacity {
            Some(tank) => tank,
            None if self.range.is_some() || self.mpg.is_some() => interval_miles / mpg,
            None => defaults.tank_capacity_gallons,
        };

        TripConfig {
            interval_miles,
            mpg,
            tank_capacity_gallons,
            search_radius_miles: self.radius.unwrap_or(defaults.search_radius_miles),
            fuel_policy: self.fuel_policy.unwrap_or(defaults.fuel_policy),
        }
    }
}

/// A planned fuel stop.
#[derive(Debug, Serialize)]
pub struct FuelStopResult {
    /// Route distance at which the stop is due
    pub mile_marker: f64,

    /// Point on the route as [lat, lon]
    pub location: [f64; 2],

    pub station_id: String,

    pub station_name: String,

    /// Station position as [lat, lon]
    pub station_location: [f64; 2],

    /// Distance from the route to the station
    pub station_distance_miles: f64,

    pub price_per_gallon: Decimal,

    pub gallons: Decimal,

    pub cost: Decimal,
}

impl FuelStopResult {
    pub fn from_stop(stop: &FuelStop) -> Self {
        Self {
            mile_marker: round2(stop.mile_marker),
            location: lat_lon(stop.location),
            station_id: stop.station_id.clone(),
            station_name: stop.station_name.clone(),
            station_location: lat_lon(stop.station_coordinate),
            station_distance_miles: round2(stop.station_distance_miles),
            price_per_gallon: stop.price_per_gallon,
            gallons: stop.gallons.round_dp(2),
            cost: stop.cost.round_dp(2),
        }
    }
}

/// Response for a fuel plan.
#[derive(Debug, Serialize)]
pub struct FuelOptimizerResponse {
    pub total_distance_miles: f64,

    /// Fuel burned over the whole route
    pub fuel_needed_gallons: f64,

    /// Fuel bought across all stops
    pub total_gallons: Decimal,

    /// Sum of stop costs, rounded for display only
    pub estimated_cost: Decimal,

    pub fuel_stops: Vec<FuelStopResult>,

    /// Route polyline as [lat, lon] pairs
    pub route_coords: Vec<[f64; 2]>,
}

impl FuelOptimizerResponse {
    pub fn from_result(result: &TripResult) -> Self {
        Self {
            total_distance_miles: round2(result.total_miles),
            fuel_needed_gallons: round2(result.fuel_needed_gallons),
            total_gallons: result.total_gallons.round_dp(2),
            estimated_cost: result.total_cost.round_dp(2),
            fuel_stops: result.stops.iter().map(FuelStopResult::from_stop).collect(),
            route_coords: result.route.waypoints().iter().copied().map(lat_lon).collect(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn lat_lon(c: Coordinate) -> [f64; 2] {
    [c.lat(), c.lon()]
}
