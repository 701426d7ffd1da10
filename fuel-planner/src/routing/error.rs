//! Routing client error types.

/// Errors from the routing provider.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid or missing API key
    #[error("unauthorized: check OPENROUTESERVICE_API_KEY")]
    Unauthorized,

    /// Rate limited by the provider
    #[error("rate limited by routing provider")]
    RateLimited,

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body could not be parsed
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// No drivable path between the two points
    #[error("no route found between the given points")]
    NoRoute,

    /// Response contained unusable geometry
    #[error("invalid route geometry: {0}")]
    InvalidGeometry(String),
}
