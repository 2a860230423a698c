//! Handlers for sensor reading submission, synthetic generation, and queries.
//!
//! Submitted and generated readings go through the same
//! [`IngestService`](crate::pipeline::IngestService) path, so threshold
//! evaluation and notification fan-out behave identically for both.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use gridwatch_core::generator;
use gridwatch_core::sensor::{SensorCategory, SensorReading};
use gridwatch_core::types::Timestamp;
use gridwatch_db::models::sensor_data::{
    ReadingFilter, SubmitAirPollutionReading, SubmitStreetLightReading, SubmitTrafficReading,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
use gridwatch_db::repositories::{
    AirPollutionReadingRepo, StreetLightReadingRepo, TrafficReadingRepo,
};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// POST /api/v1/sensors/traffic
///
/// Submit a traffic reading. Missing id/timestamp are defaulted, then the
/// reading is validated, persisted, and evaluated.
pub async fn submit_traffic(
    State(state): State<AppState>,
    Json(input): Json<SubmitTrafficReading>,
) -> AppResult<impl IntoResponse> {
    let reading = SensorReading::Traffic(input.into_reading(Utc::now()));
    let (reading, _alerts) = state.pipeline.ingest(reading).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: reading })))
}

/// POST /api/v1/sensors/air-pollution
pub async fn submit_air_pollution(
    State(state): State<AppState>,
    Json(input): Json<SubmitAirPollutionReading>,
) -> AppResult<impl IntoResponse> {
    let reading = SensorReading::AirPollution(input.into_reading(Utc::now()));
    let (reading, _alerts) = state.pipeline.ingest(reading).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: reading })))
}

/// POST /api/v1/sensors/street-light
pub async fn submit_street_light(
    State(state): State<AppState>,
    Json(input): Json<SubmitStreetLightReading>,
) -> AppResult<impl IntoResponse> {
    let reading = SensorReading::StreetLight(input.into_reading(Utc::now()));
    let (reading, _alerts) = state.pipeline.ingest(reading).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: reading })))
}

// ---------------------------------------------------------------------------
// Synthetic generation
// ---------------------------------------------------------------------------

async fn generate_one(state: &AppState, category: SensorCategory) -> AppResult<SensorReading> {
    let reading = generator::generate(category);
    let (reading, _alerts) = state.pipeline.ingest(reading).await?;
    Ok(reading)
}

/// POST /api/v1/sensors/generate/traffic
pub async fn generate_traffic(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let reading = generate_one(&state, SensorCategory::Traffic).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: reading })))
}

/// POST /api/v1/sensors/generate/air-pollution
pub async fn generate_air_pollution(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let reading = generate_one(&state, SensorCategory::AirPollution).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: reading })))
}

/// POST /api/v1/sensors/generate/street-light
pub async fn generate_street_light(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let reading = generate_one(&state, SensorCategory::StreetLight).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: reading })))
}

/// POST /api/v1/sensors/generate/all
///
/// Generate one reading per category, as a scheduler tick does.
pub async fn generate_all(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut readings = Vec::with_capacity(SensorCategory::ALL.len());
    for category in SensorCategory::ALL {
        readings.push(generate_one(&state, category).await?);
    }

    Ok((StatusCode::CREATED, Json(DataResponse { data: readings })))
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Query parameters for the reading list endpoints.
#[derive(Debug, Deserialize)]
pub struct ReadingListParams {
    pub location: Option<String>,
    /// Categorical value in its text form (`High`, `Hazardous`, `On`, ...).
    pub status: Option<String>,
    pub from: Option<Timestamp>,
    pub to: Option<Timestamp>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ReadingListParams {
    fn into_filter(self) -> ReadingFilter {
        ReadingFilter {
            location: self.location,
            status: self.status,
            from: self.from,
            to: self.to,
            limit: self.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
            offset: self.offset.unwrap_or(0).max(0),
        }
    }
}

/// GET /api/v1/sensors/traffic
pub async fn list_traffic(
    State(state): State<AppState>,
    Query(params): Query<ReadingListParams>,
) -> AppResult<impl IntoResponse> {
    let rows = TrafficReadingRepo::list(&state.pool, &params.into_filter()).await?;

    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/sensors/air-pollution
pub async fn list_air_pollution(
    State(state): State<AppState>,
    Query(params): Query<ReadingListParams>,
) -> AppResult<impl IntoResponse> {
    let rows = AirPollutionReadingRepo::list(&state.pool, &params.into_filter()).await?;

    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/sensors/street-light
pub async fn list_street_light(
    State(state): State<AppState>,
    Query(params): Query<ReadingListParams>,
) -> AppResult<impl IntoResponse> {
    let rows = StreetLightReadingRepo::list(&state.pool, &params.into_filter()).await?;

    Ok(Json(DataResponse { data: rows }))
}
