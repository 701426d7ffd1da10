//! Fuel stop planner.
//!
//! Splits a driving route into checkpoints one interval apart, picks the
//! cheapest station near each checkpoint and totals the cost of the trip.

mod config;
mod segment;
mod select;
mod trip;


pub use config::{FuelPolicy, TripConfig};
pub use segment::{Checkpoint, Checkpoints, InvalidRoute, Route};
pub use select::{FuelStop, StopSelector};
pub use trip::{RouteProvider, TripError, TripResult, optimize_trip, plan_stops};
