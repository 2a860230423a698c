//! Route definitions for alert queries, mounted at `/alerts`.

use axum::routing::get;
use axum::Router;

use crate::handlers::alerts;
use crate::state::AppState;

/// ```text
/// GET /recent   -> recent_alerts
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/recent", get(alerts::recent_alerts))
}
