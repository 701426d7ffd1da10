//! OpenRouteService GeoJSON directions response.
//!
//! Only the fields the planner needs are modelled; everything else is
//! ignored during deserialization.

use serde::Deserialize;

use crate::geo::Coordinate;
use crate::planner::Route;

use super::error::RouteError;

/// Miles per metre.
pub const MILES_PER_METRE: f64 = 0.000621371;

/// Top-level GeoJSON feature collection.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// One route alternative.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: Properties,
}

/// LineString geometry as `[lon, lat]` pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub segments: Vec<Summary>,
    pub summary: Option<Summary>,
}

/// Distance (metres) and duration (seconds) of a route or segment.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
}

impl DirectionsResponse {
    /// Convert the first route alternative into a [`Route`].
    pub fn into_route(self) -> Result<Route, RouteError> {
        let feature = self.features.into_iter().next().ok_or(RouteError::NoRoute)?;

        let waypoints = feature
            .geometry
            .coordinates
            .iter()
            .map(|[lon, lat]| Coordinate::new(*lon, *lat))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| RouteError::InvalidGeometry(e.to_string()))?;

        let metres = match feature.properties.summary {
            Some(summary) => summary.distance,
            None => feature.properties.segments.iter().map(|s| s.distance).sum(),
        };

        Route::new(waypoints, metres * MILES_PER_METRE)
            .map_err(|e| RouteError::InvalidGeometry(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "bbox": [-118.2437, 34.0522, -87.6298, 41.8781],
        "features": [{
            "type": "Feature",
            "bbox": [-118.2437, 34.0522, -87.6298, 41.8781],
            "properties": {
                "segments": [{"distance": 3257510.4, "duration": 108000.0, "steps": []}],
                "summary": {"distance": 3257510.4, "duration": 108000.0},
                "way_points": [0, 2]
            },
            "geometry": {
                "type": "LineString",
                "coordinates": [[-118.2437, 34.0522], [-104.99, 39.74], [-87.6298, 41.8781]]
            }
        }],
        "metadata": {"service": "routing"}
    }"#;

    #[test]
    fn parses_sample_response() {
        let response: DirectionsResponse = serde_json::from_str(SAMPLE).unwrap();
        let route = response.into_route().unwrap();

        assert_eq!(route.waypoints().len(), 3);
        assert_eq!(route.waypoints()[0].lon(), -118.2437);
        assert_eq!(route.waypoints()[0].lat(), 34.0522);
        assert!((route.total_distance_miles() - 2024.12).abs() < 0.01);
    }

    #[test]
    fn falls_back_to_segment_sum() {
        let json = r#"{
            "features": [{
                "properties": {"segments": [{"distance": 1000.0}, {"distance": 609.344}]},
                "geometry": {"coordinates": [[0.0, 0.0], [0.0, 0.01]]}
            }]
        }"#;
        let response: DirectionsResponse = serde_json::from_str(json).unwrap();
        let route = response.into_route().unwrap();

        assert!((route.total_distance_miles() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn no_features_is_no_route() {
        let response: DirectionsResponse = serde_json::from_str(r#"{"features": []}"#).unwrap();
        assert!(matches!(response.into_route(), Err(RouteError::NoRoute)));
    }

    #[test]
    fn bad_coordinate_is_invalid_geometry() {
        let json = r#"{
            "features": [{
                "properties": {"summary": {"distance": 10.0}},
                "geometry": {"coordinates": [[0.0, 95.0]]}
            }]
        }"#;
        let response: DirectionsResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            response.into_route(),
            Err(RouteError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn empty_polyline_is_invalid_geometry() {
        let json = r#"{
            "features": [{
                "properties": {"summary": {"distance": 10.0}},
                "geometry": {"coordinates": []}
            }]
        }"#;
        let response: DirectionsResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            response.into_route(),
            Err(RouteError::InvalidGeometry(_))
        ));
    }
}
