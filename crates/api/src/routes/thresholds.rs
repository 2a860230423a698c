//! Route definitions for threshold configuration, mounted at `/thresholds`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::thresholds;
use crate::state::AppState;

/// ```text
/// POST /           -> upsert_threshold
/// GET  /           -> list_thresholds
/// GET  /{metric}   -> get_threshold
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(thresholds::upsert_threshold).get(thresholds::list_thresholds),
        )
        .route("/{metric}", get(thresholds::get_threshold))
}
