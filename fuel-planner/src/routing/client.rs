//! OpenRouteService HTTP client.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::debug;

use crate::geo::Coordinate;
use crate::planner::{Route, RouteProvider};

use super::error::RouteError;
use super::types::DirectionsResponse;

/// Default base URL for the OpenRouteService API.
const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org";

/// Default directions profile.
const DEFAULT_PROFILE: &str = "driving-car";

/// Configuration for the routing client.
#[derive(Debug, Clone)]
pub struct OrsConfig {
    /// API key sent in the Authorization header
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Directions profile
    pub profile: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OrsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            profile: DEFAULT_PROFILE.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the directions profile.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// OpenRouteService directions client.
#[derive(Debug, Clone)]
pub struct OrsClient {
    http: reqwest::Client,
    base_url: String,
    profile: String,
}

impl OrsClient {
    /// Create a new routing client with the given configuration.
    pub fn new(config: OrsConfig) -> Result<Self, RouteError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| RouteError::Api {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert(AUTHORIZATION, api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            profile: config.profile,
        })
    }

    /// Request URL for the configured profile.
    fn directions_url(&self) -> String {
        format!("{}/v2/directions/{}", self.base_url, self.profile)
    }

    /// Fetch the driving route between two points.
    pub async fn fetch_route(&self, start: Coordinate, end: Coordinate) -> Result<Route, RouteError> {
        let url = self.directions_url();
        debug!(%start, %end, "requesting route");

        let response = self
            .http
            .get(&url)
            .query(&[("start", lon_lat(start)), ("end", lon_lat(end))])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(RouteError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RouteError::RateLimited);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RouteError::NoRoute);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RouteError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let directions: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| RouteError::Json {
                message: e.to_string(),
            })?;

        directions.into_route()
    }
}

impl RouteProvider for OrsClient {
    async fn get_route(&self, start: Coordinate, end: Coordinate) -> Result<Route, RouteError> {
        self.fetch_route(start, end).await
    }
}

/// Format a coordinate the way ORS expects: `lon,lat`.
fn lon_lat(c: Coordinate) -> String {
    format!("{},{}", c.lon(), c.lat())
}
