//! Integration tests for sensor reading submission, generation, and queries.

mod common;

use axum::http::StatusCode;
use common::{assert_error_code, body_json, get, post_empty, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn submit_valid_traffic_reading(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_json(
        app,
        "/api/v1/sensors/traffic",
        json!({
            "location": "Street 12",
            "traffic_density": 250,
            "avg_speed": 45.5,
            "congestion_level": "High"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    // Defaulted id/timestamp are filled in before persistence.
    assert!(body["data"]["id"].is_string());
    assert_eq!(body["data"]["location"], "Street 12");
    assert_eq!(body["data"]["traffic_density"], 250);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM traffic_sensor_data")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn out_of_range_reading_is_rejected_and_not_persisted(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    // co bound is [0, 50]; 55 is out of range.
    let response = post_json(
        app,
        "/api/v1/sensors/air-pollution",
        json!({
            "location": "Zone 3",
            "pm2_5": 10.0,
            "pm10": 20.0,
            "co": 55.0,
            "no2": 5.0,
            "so2": 2.0,
            "ozone": 30.0,
            "pollution_level": "Moderate"
        }),
    )
    .await;

    assert_error_code(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;

    // Rejected before persistence: no row, no alert.
    let readings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM air_pollution_sensor_data")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(readings, 0);

    let alerts: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM alerts")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(alerts, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_location_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/sensors/street-light",
        json!({
            "location": "   ",
            "brightness_level": 80,
            "power_consumption": 1200.0,
            "status": "On"
        }),
    )
    .await;

    assert_error_code(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn boundary_values_are_accepted(pool: PgPool) {
    let app = common::build_test_app(pool);

    // Both alertable traffic metrics at their upper bounds.
    let response = post_json(
        app,
        "/api/v1/sensors/traffic",
        json!({
            "location": "Street 1",
            "traffic_density": 500,
            "avg_speed": 120.0,
            "congestion_level": "Severe"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Synthetic generation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn generate_traffic_persists_one_reading(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_empty(app, "/api/v1/sensors/generate/traffic").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["data"]["category"], "traffic");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM traffic_sensor_data")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn generate_all_persists_one_reading_per_category(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_empty(app, "/api/v1/sensors/generate/all").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    for table in [
        "traffic_sensor_data",
        "air_pollution_sensor_data",
        "street_light_sensor_data",
    ] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1, "expected one row in {table}");
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_filters_by_location_and_status(pool: PgPool) {
    let app = common::build_test_app(pool);

    for (location, level) in [("Street 1", "Low"), ("Street 1", "High"), ("Street 2", "High")] {
        let response = post_json(
            app.clone(),
            "/api/v1/sensors/traffic",
            json!({
                "location": location,
                "traffic_density": 100,
                "avg_speed": 60.0,
                "congestion_level": level
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app.clone(), "/api/v1/sensors/traffic?location=Street%201").await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let response = get(
        app.clone(),
        "/api/v1/sensors/traffic?location=Street%201&status=High",
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // Unknown status text matches nothing rather than erroring.
    let response = get(app, "/api/v1/sensors/traffic?status=Gridlock").await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_respects_limit_and_offset(pool: PgPool) {
    let app = common::build_test_app(pool);

    for i in 0..5 {
        let response = post_json(
            app.clone(),
            "/api/v1/sensors/street-light",
            json!({
                "location": format!("LightPole-{i}"),
                "brightness_level": 50,
                "power_consumption": 900.0,
                "status": "On"
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app.clone(), "/api/v1/sensors/street-light?limit=2").await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let response = get(app, "/api/v1/sensors/street-light?limit=2&offset=4").await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}
