//! Integration tests for the threshold-alerting pipeline.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

async fn configure_threshold(app: Router, metric: &str, value: f64, direction: &str) {
    let response = post_json(
        app,
        "/api/v1/thresholds",
        json!({ "metric": metric, "threshold_value": value, "direction": direction }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

async fn submit_co_reading(app: Router, co: f64) -> StatusCode {
    let response = post_json(
        app,
        "/api/v1/sensors/air-pollution",
        json!({
            "location": "Zone 7",
            "pm2_5": 10.0,
            "pm10": 20.0,
            "co": co,
            "no2": 5.0,
            "so2": 2.0,
            "ozone": 30.0,
            "pollution_level": "Moderate"
        }),
    )
    .await;
    response.status()
}

async fn alert_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM alerts")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Crossing semantics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn above_threshold_fires_only_on_strict_crossing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    configure_threshold(app.clone(), "co", 40.0, "Above").await;

    // Exactly at the threshold: no alert.
    assert_eq!(submit_co_reading(app.clone(), 40.0).await, StatusCode::CREATED);
    assert_eq!(alert_count(&pool).await, 0);

    // Below the threshold: no alert.
    assert_eq!(submit_co_reading(app.clone(), 39.9).await, StatusCode::CREATED);
    assert_eq!(alert_count(&pool).await, 0);

    // Strictly above: one alert, snapshotting the configured value.
    assert_eq!(submit_co_reading(app.clone(), 45.3).await, StatusCode::CREATED);
    assert_eq!(alert_count(&pool).await, 1);

    let response = get(app, "/api/v1/alerts/recent").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["count"], 1);
    assert_eq!(body["message"], "1 alerts fetched successfully.");
    assert_eq!(body["alerts"][0]["metric"], "co");
    assert_eq!(body["alerts"][0]["observed_value"], 45.3);
    assert_eq!(body["alerts"][0]["threshold_value"], 40.0);
    assert_eq!(body["alerts"][0]["direction"], "Above");
    assert_eq!(body["alerts"][0]["category"], "air_pollution");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn below_threshold_fires_on_strictly_lower_values(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    configure_threshold(app.clone(), "avgSpeed", 20.0, "Below").await;

    let submit = |app: Router, speed: f64| {
        post_json(
            app,
            "/api/v1/sensors/traffic",
            json!({
                "location": "Street 5",
                "traffic_density": 300,
                "avg_speed": speed,
                "congestion_level": "Severe"
            }),
        )
    };

    assert_eq!(submit(app.clone(), 20.0).await.status(), StatusCode::CREATED);
    assert_eq!(alert_count(&pool).await, 0);

    assert_eq!(submit(app.clone(), 12.5).await.status(), StatusCode::CREATED);
    assert_eq!(alert_count(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn no_configured_threshold_means_no_alert(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    assert_eq!(submit_co_reading(app, 49.0).await, StatusCode::CREATED);
    assert_eq!(alert_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn every_crossing_produces_a_new_alert(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    configure_threshold(app.clone(), "co", 40.0, "Above").await;

    // No cooldown or deduplication: three crossings, three alerts.
    for _ in 0..3 {
        assert_eq!(submit_co_reading(app.clone(), 48.0).await, StatusCode::CREATED);
    }
    assert_eq!(alert_count(&pool).await, 3);
}

// ---------------------------------------------------------------------------
// Snapshot semantics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn historical_alerts_keep_their_threshold_snapshot(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    configure_threshold(app.clone(), "co", 40.0, "Above").await;

    assert_eq!(submit_co_reading(app.clone(), 45.0).await, StatusCode::CREATED);

    // Edit the threshold after the alert fired.
    configure_threshold(app.clone(), "co", 10.0, "Above").await;

    let response = get(app, "/api/v1/alerts/recent").await;
    let body = body_json(response).await;

    // The persisted alert still carries the value active at evaluation time.
    assert_eq!(body["alerts"][0]["threshold_value"], 40.0);
}

// ---------------------------------------------------------------------------
// Recent window
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn recent_window_excludes_older_alerts(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    configure_threshold(app.clone(), "co", 40.0, "Above").await;
    assert_eq!(submit_co_reading(app.clone(), 45.0).await, StatusCode::CREATED);

    // Age the alert beyond a 1-second lookback window.
    sqlx::query("UPDATE alerts SET triggered_at = triggered_at - INTERVAL '10 seconds'")
        .execute(&pool)
        .await
        .unwrap();

    let response = get(app.clone(), "/api/v1/alerts/recent?seconds=1").await;
    let body = body_json(response).await;
    assert_eq!(body["count"], 0);
    assert_eq!(body["message"], "No alerts found.");

    // A wider window still sees it.
    let response = get(app, "/api/v1/alerts/recent?seconds=60").await;
    let body = body_json(response).await;
    assert_eq!(body["count"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_positive_window_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/alerts/recent?seconds=0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn oversized_window_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    // i64::MAX seconds overflows the lookback arithmetic; must be a 400,
    // not a panic surfaced as a 500.
    let response = get(
        app,
        "/api/v1/alerts/recent?seconds=9223372036854775807",
    )
    .await;
    common::assert_error_code(response, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
}
