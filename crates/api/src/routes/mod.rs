pub mod alerts;
pub mod health;
pub mod recipients;
pub mod sensors;
pub mod thresholds;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /sensors/traffic                       submit (POST), list (GET)
/// /sensors/air-pollution                 submit (POST), list (GET)
/// /sensors/street-light                  submit (POST), list (GET)
/// /sensors/generate/traffic              generate + ingest one (POST)
/// /sensors/generate/air-pollution        generate + ingest one (POST)
/// /sensors/generate/street-light         generate + ingest one (POST)
/// /sensors/generate/all                  generate + ingest all categories (POST)
///
/// /thresholds                            upsert (POST), list (GET)
/// /thresholds/{metric}                   find one (GET)
///
/// /alerts/recent                         alerts in lookback window (GET)
///
/// /recipients                            register (POST), list (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/sensors", sensors::router())
        .nest("/thresholds", thresholds::router())
        .nest("/alerts", alerts::router())
        .nest("/recipients", recipients::router())
}
