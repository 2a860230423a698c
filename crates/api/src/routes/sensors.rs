//! Route definitions for sensor readings, mounted at `/sensors`.

use axum::routing::post;
use axum::Router;

use crate::handlers::sensors;
use crate::state::AppState;

/// ```text
/// POST /traffic                      -> submit_traffic
/// GET  /traffic                      -> list_traffic
/// POST /air-pollution                -> submit_air_pollution
/// GET  /air-pollution                -> list_air_pollution
/// POST /street-light                 -> submit_street_light
/// GET  /street-light                 -> list_street_light
/// POST /generate/traffic             -> generate_traffic
/// POST /generate/air-pollution       -> generate_air_pollution
/// POST /generate/street-light        -> generate_street_light
/// POST /generate/all                 -> generate_all
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/traffic",
            post(sensors::submit_traffic).get(sensors::list_traffic),
        )
        .route(
            "/air-pollution",
            post(sensors::submit_air_pollution).get(sensors::list_air_pollution),
        )
        .route(
            "/street-light",
            post(sensors::submit_street_light).get(sensors::list_street_light),
        )
        .route("/generate/traffic", post(sensors::generate_traffic))
        .route(
            "/generate/air-pollution",
            post(sensors::generate_air_pollution),
        )
        .route(
            "/generate/street-light",
            post(sensors::generate_street_light),
        )
        .route("/generate/all", post(sensors::generate_all))
}
