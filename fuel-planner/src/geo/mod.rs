//! Geographic primitives.
//!
//! Coordinates are validated at construction, so every function that takes
//! a `Coordinate` can trust its range and finiteness.

mod coordinate;
mod distance;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use distance::{EARTH_RADIUS_MILES, great_circle_miles, interpolate};
