//! Trip aggregation: route → checkpoints → stops → totals.

use std::future::Future;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::catalog::StationIndex;
use crate::geo::{Coordinate, InvalidCoordinate};
use crate::routing::RouteError;

use super::config::TripConfig;
use super::segment::Route;
use super::select::{FuelStop, StopSelector};

/// Error from trip optimization.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TripError {
    /// A coordinate was malformed
    #[error(transparent)]
    InvalidCoordinate(#[from] InvalidCoordinate),

    /// The station catalog has no stations
    #[error("station catalog is empty")]
    EmptyCatalog,

    /// The routing provider could not produce a path
    #[error("route unavailable: {0}")]
    RouteUnavailable(String),

    /// A checkpoint has no station within the search radius
    #[error("no station within range of mile {mile_marker:.1} at {coordinate}")]
    NoStationInRange {
        mile_marker: f64,
        coordinate: Coordinate,
    },

    /// Trip parameters are unusable
    #[error("invalid trip configuration: {0}")]
    InvalidConfig(String),
}

impl From<RouteError> for TripError {
    fn from(e: RouteError) -> Self {
        TripError::RouteUnavailable(e.to_string())
    }
}

/// Trait for obtaining driving routes.
///
/// This abstraction allows the planner to be tested without network access.
pub trait RouteProvider {
    /// Get the driving route from `start` to `end`.
    fn get_route(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> impl Future<Output = Result<Route, RouteError>> + Send;
}

/// Outcome of one optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct TripResult {
    /// Route distance as reported by the provider (miles).
    pub total_miles: f64,

    /// Fuel burned over the whole route at the configured mpg.
    pub fuel_needed_gallons: f64,

    /// Fuel bought across all stops.
    pub total_gallons: Decimal,

    /// Exact sum of the stop costs.
    pub total_cost: Decimal,

    /// Stops in travel order.
    pub stops: Vec<FuelStop>,

    pub route: Route,
}

/// Plan fuel stops along an already-fetched route.
///
/// Fails on the first checkpoint without a reachable station; no partial
/// plan is returned.
pub fn plan_stops(
    route: Route,
    index: &StationIndex,
    config: &TripConfig,
) -> Result<TripResult, TripError> {
    config.validate()?;
    if index.is_empty() {
        return Err(TripError::EmptyCatalog);
    }

    let total_miles = route.total_distance_miles();
    let selector = StopSelector::new(index, config);

    let mut stops = Vec::new();
    for checkpoint in route.checkpoints(config.interval_miles) {
        let leg_miles = config
            .interval_miles
            .min(total_miles - checkpoint.mile_marker);
        let stop = selector.select(&checkpoint, leg_miles)?;

        debug!(
            mile = stop.mile_marker,
            station = %stop.station_name,
            price = %stop.price_per_gallon,
            gallons = %stop.gallons,
            "selected fuel stop"
        );
        stops.push(stop);
    }

    let total_gallons = checked_sum(stops.iter().map(|s| s.gallons), "gallons")?;
    let total_cost = checked_sum(stops.iter().map(|s| s.cost), "cost")?;

    Ok(TripResult {
        total_miles,
        fuel_needed_gallons: total_miles / config.mpg,
        total_gallons,
        total_cost,
        stops,
        route,
    })
}

/// Sum decimals, reporting overflow instead of panicking.
fn checked_sum(mut values: impl Iterator<Item = Decimal>, what: &str) -> Result<Decimal, TripError> {
    values
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v))
        .ok_or_else(|| TripError::InvalidConfig(format!("total {what} overflows")))
}

/// Fetch a route from `provider` and plan the cheapest fuel stops along it.
pub async fn optimize_trip<P: RouteProvider>(
    provider: &P,
    index: &StationIndex,
    start: Coordinate,
    end: Coordinate,
    config: &TripConfig,
) -> Result<TripResult, TripError> {
    config.validate()?;

    let route = provider.get_route(start, end).await?;
    debug!(
        waypoints = route.waypoints().len(),
        miles = route.total_distance_miles(),
        "fetched route"
    );

    let result = plan_stops(route, index, config)?;
    info!(
        %start,
        %end,
        miles = result.total_miles,
        stops = result.stops.len(),
        cost = %result.total_cost,
        "optimized trip"
    );
    Ok(result)
}
