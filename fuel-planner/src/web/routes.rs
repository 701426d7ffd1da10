//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::geo::Coordinate;
use crate::planner::{TripError, optimize_trip};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/fuel-optimizer", post(fuel_optimizer))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan the cheapest fuel stops between two points.
async fn fuel_optimizer(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<FuelOptimizerResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: FuelOptimizerRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid request JSON");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let start = parse_point(req.start, "start")?;
    let end = parse_point(req.end, "end")?;
    let config = req.trip_config(&state.config);

    let result = optimize_trip(
        state.routes.as_ref(),
        &state.stations,
        start,
        end,
        &config,
    )
    .await?;

    Ok(Json(FuelOptimizerResponse::from_result(&result)))
}

fn parse_point(point: Option<LatLon>, name: &str) -> Result<Coordinate, AppError> {
    point
        .and_then(|p| p.to_coordinate().ok())
        .ok_or_else(|| AppError::BadRequest {
            message: format!("Missing or invalid '{name}' coordinates (lat/lon required)."),
        })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unprocessable { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl From<TripError> for AppError {
    fn from(e: TripError) -> Self {
        let message = e.to_string();
        match e {
            TripError::InvalidCoordinate(_) | TripError::InvalidConfig(_) => {
                AppError::BadRequest { message }
            }
            TripError::NoStationInRange { .. } => AppError::Unprocessable { message },
            TripError::RouteUnavailable(_) => AppError::BadGateway { message },
            TripError::EmptyCatalog => AppError::Internal { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
