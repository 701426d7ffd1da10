use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fuel_planner::cache::{CacheConfig, CachedRouteClient};
use fuel_planner::catalog::StationCatalog;
use fuel_planner::planner::TripConfig;
use fuel_planner::routing::{OrsClient, OrsConfig};
use fuel_planner::web::{AppState, create_router};

/// Catalog file used when `STATION_CATALOG` is not set.
const DEFAULT_CATALOG: &str = "fuel-price-geocoded.csv";

/// Listen address used when `BIND_ADDR` is not set.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Get credentials from environment
    let api_key = std::env::var("OPENROUTESERVICE_API_KEY").unwrap_or_else(|_| {
        warn!("OPENROUTESERVICE_API_KEY not set. Routing calls will fail.");
        String::new()
    });
    let catalog_path =
        std::env::var("STATION_CATALOG").unwrap_or_else(|_| DEFAULT_CATALOG.to_string());
    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()?;

    // Load the station catalog once (fail fast if unusable)
    let catalog = StationCatalog::from_path(&catalog_path)?;

    // Create cached routing client
    let client = OrsClient::new(OrsConfig::new(api_key))?;
    let routes = CachedRouteClient::new(client, &CacheConfig::default());

    let config = TripConfig::default();
    config.validate()?;

    let state = AppState::new(routes, catalog.index, config);
    let app = create_router(state);

    info!(%addr, "fuel planner listening");
    info!("  GET  /health          - Health check");
    info!("  POST /fuel-optimizer  - Plan fuel stops");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
