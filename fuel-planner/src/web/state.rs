//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedRouteClient;
use crate::catalog::StationIndex;
use crate::planner::TripConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests. The station index
/// is read-only after startup, so it is shared without a lock.
#[derive(Clone)]
pub struct AppState {
    /// Cached routing client
    pub routes: Arc<CachedRouteClient>,

    /// Station catalog
    pub stations: Arc<StationIndex>,

    /// Default trip parameters; requests may override them
    pub config: Arc<TripConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(routes: CachedRouteClient, stations: StationIndex, config: TripConfig) -> Self {
        Self {
            routes: Arc::new(routes),
            stations: Arc::new(stations),
            config: Arc::new(config),
        }
    }
}
