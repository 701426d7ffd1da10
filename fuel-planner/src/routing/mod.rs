//! OpenRouteService directions client.
//!
//! Fetches a driving route between two coordinates and converts the GeoJSON
//! response into a [`Route`](crate::planner::Route): the polyline in travel
//! order plus the provider's total distance in miles.

mod client;
mod error;
mod types;

pub use client::{OrsClient, OrsConfig};
pub use error::RouteError;
pub use types::{DirectionsResponse, Feature, Geometry, Properties, Summary};
