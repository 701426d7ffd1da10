//! Web layer for the fuel stop planner.
//!
//! Exposes a single JSON endpoint that plans fuel stops between two points.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
