//! Route definitions for the recipient directory, mounted at `/recipients`.

use axum::routing::post;
use axum::Router;

use crate::handlers::recipients;
use crate::state::AppState;

/// ```text
/// POST /   -> create_recipient
/// GET  /   -> list_recipients
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        post(recipients::create_recipient).get(recipients::list_recipients),
    )
}
