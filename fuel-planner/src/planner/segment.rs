//! Route segmentation into refueling checkpoints.
//!
//! A checkpoint is placed at every whole multiple of the interval along the
//! route. The final remainder shorter than one interval gets no checkpoint:
//! the fill at the last checkpoint already covers it, since the interval
//! never exceeds the vehicle range.

use crate::geo::{Coordinate, great_circle_miles, interpolate};

/// Error returned when a route is malformed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid route: {reason}")]
pub struct InvalidRoute {
    reason: &'static str,
}

/// A driving route: an ordered polyline plus the provider's total distance.
///
/// The reported total is authoritative. Polyline segment lengths are only
/// used to locate points proportionally along the path.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    waypoints: Vec<Coordinate>,
    total_distance_miles: f64,
}

impl Route {
    /// Create a route from waypoints in travel order.
    ///
    /// Requires at least one waypoint and a finite, non-negative distance.
    pub fn new(waypoints: Vec<Coordinate>, total_distance_miles: f64) -> Result<Self, InvalidRoute> {
        if waypoints.is_empty() {
            return Err(InvalidRoute {
                reason: "route has no waypoints",
            });
        }
        if !total_distance_miles.is_finite() || total_distance_miles < 0.0 {
            return Err(InvalidRoute {
                reason: "total distance must be finite and non-negative",
            });
        }
        Ok(Self {
            waypoints,
            total_distance_miles,
        })
    }

    pub fn waypoints(&self) -> &[Coordinate] {
        &self.waypoints
    }

    pub fn total_distance_miles(&self) -> f64 {
        self.total_distance_miles
    }

    /// Great-circle length of the polyline itself (miles).
    pub fn polyline_miles(&self) -> f64 {
        self.waypoints
            .windows(2)
            .map(|w| great_circle_miles(w[0], w[1]))
            .sum()
    }

    /// Iterate over checkpoints every `interval_miles` along the route.
    pub fn checkpoints(&self, interval_miles: f64) -> Checkpoints<'_> {
        Checkpoints::new(self, interval_miles)
    }
}

/// A point on the route where a refueling decision is made.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkpoint {
    /// Cumulative distance from the start of the route (miles).
    pub mile_marker: f64,

    /// Location on the route at that distance.
    pub coordinate: Coordinate,
}

/// Lazy, single-pass iterator over a route's checkpoints.
///
/// Mile markers are `interval, 2 * interval, ...` up to and including the
/// route's total distance, so they are strictly increasing and never exceed
/// it. A non-positive or non-finite interval yields nothing.
#[derive(Debug, Clone)]
pub struct Checkpoints<'a> {
    route: &'a Route,
    interval_miles: f64,
    /// Route miles per polyline mile, or `None` for a zero-length polyline.
    scale: Option<f64>,
    /// Index of the waypoint starting the current segment.
    segment: usize,
    /// Route miles at the start of the current segment.
    segment_start_miles: f64,
    /// Multiple of the interval for the next checkpoint.
    next_multiple: u64,
}

impl<'a> Checkpoints<'a> {
    pub fn new(route: &'a Route, interval_miles: f64) -> Self {
        let polyline = route.polyline_miles();
        let scale = (polyline > 0.0).then(|| route.total_distance_miles / polyline);

        Self {
            route,
            interval_miles,
            scale,
            segment: 0,
            segment_start_miles: 0.0,
            next_multiple: 1,
        }
    }

    /// Locate the point `marker` route-miles from the start.
    ///
    /// Only moves forward, so successive calls must use increasing markers.
    fn locate(&mut self, marker: f64) -> Coordinate {
        let waypoints = &self.route.waypoints;
        let Some(scale) = self.scale else {
            return waypoints[0];
        };

        while self.segment + 1 < waypoints.len() {
            let from = waypoints[self.segment];
            let to = waypoints[self.segment + 1];
            let length = great_circle_miles(from, to) * scale;

            if self.segment_start_miles + length >= marker {
                let fraction = (marker - self.segment_start_miles) / length;
                return interpolate(from, to, fraction);
            }

            self.segment_start_miles += length;
            self.segment += 1;
        }

        // Rounding can leave the last marker a hair past the summed segments
        waypoints[waypoints.len() - 1]
    }
}

impl Iterator for Checkpoints<'_> {
    type Item = Checkpoint;

    fn next(&mut self) -> Option<Checkpoint> {
        if !self.interval_miles.is_finite() || self.interval_miles <= 0.0 {
            return None;
        }

        let mile_marker = self.next_multiple as f64 * self.interval_miles;
        if mile_marker > self.route.total_distance_miles {
            return None;
        }
        self.next_multiple += 1;

        let coordinate = self.locate(mile_marker);
        Some(Checkpoint {
            mile_marker,
            coordinate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lon: f64, lat: f64) -> Coordinate {
        Coordinate::new(lon, lat).unwrap()
    }

    /// Straight route north along the prime meridian.
    fn meridian_route(points: usize, degrees: f64, total: f64) -> Route {
        let waypoints = (0..points)
            .map(|i| coord(0.0, degrees * i as f64 / (points - 1) as f64))
            .collect();
        Route::new(waypoints, total).unwrap()
    }

    #[test]
    fn rejects_empty_waypoints() {
        assert!(Route::new(Vec::new(), 10.0).is_err());
    }

    #[test]
    fn rejects_bad_distance() {
        assert!(Route::new(vec![coord(0.0, 0.0)], -1.0).is_err());
        assert!(Route::new(vec![coord(0.0, 0.0)], f64::NAN).is_err());
    }

    #[test]
    fn short_route_has_no_checkpoints() {
        let route = meridian_route(5, 4.0, 300.0);
        assert_eq!(route.checkpoints(500.0).count(), 0);
    }

    #[test]
    fn remainder_gets_no_checkpoint() {
        let route = meridian_route(50, 30.0, 2024.12);
        let markers: Vec<_> = route.checkpoints(500.0).map(|c| c.mile_marker).collect();
        assert_eq!(markers, vec![500.0, 1000.0, 1500.0, 2000.0]);
    }

    #[test]
    fn exact_multiple_includes_endpoint() {
        let route = meridian_route(3, 2.0, 1000.0);
        let checkpoints: Vec<_> = route.checkpoints(500.0).collect();

        assert_eq!(checkpoints.len(), 2);
        assert_eq!(checkpoints[1].mile_marker, 1000.0);
        assert!((checkpoints[1].coordinate.lat() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn interpolates_proportionally_to_reported_total() {
        // Polyline spans 10 degrees of latitude; provider reports 1000 miles.
        // Checkpoint at 500 miles should sit halfway along.
        let route = meridian_route(2, 10.0, 1000.0);
        let first = route.checkpoints(500.0).next().unwrap();

        assert_eq!(first.mile_marker, 500.0);
        assert!((first.coordinate.lat() - 5.0).abs() < 1e-9);
        assert_eq!(first.coordinate.lon(), 0.0);
    }

    #[test]
    fn crosses_many_segments() {
        let route = meridian_route(101, 10.0, 1000.0);
        let lats: Vec<_> = route.checkpoints(250.0).map(|c| c.coordinate.lat()).collect();

        assert_eq!(lats.len(), 4);
        for (lat, expected) in lats.iter().zip([2.5, 5.0, 7.5, 10.0]) {
            assert!((lat - expected).abs() < 1e-6, "{lat} vs {expected}");
        }
    }

    #[test]
    fn degenerate_polyline_uses_first_waypoint() {
        let start = coord(-97.0, 35.0);
        let route = Route::new(vec![start, start], 1200.0).unwrap();
        let checkpoints: Vec<_> = route.checkpoints(500.0).collect();

        assert_eq!(checkpoints.len(), 2);
        assert!(checkpoints.iter().all(|c| c.coordinate == start));
    }

    #[test]
    fn zero_interval_yields_nothing() {
        let route = meridian_route(3, 2.0, 1000.0);
        assert_eq!(route.checkpoints(0.0).count(), 0);
        assert_eq!(route.checkpoints(-10.0).count(), 0);
        assert_eq!(route.checkpoints(f64::NAN).count(), 0);
    }
}
