//! Handlers for threshold configuration.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use gridwatch_core::threshold::{AlertDirection, Threshold};
use gridwatch_db::repositories::ThresholdRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Inbound threshold configuration.
#[derive(Debug, Deserialize)]
pub struct UpsertThreshold {
    pub metric: String,
    pub threshold_value: f64,
    pub direction: AlertDirection,
}

/// POST /api/v1/thresholds
///
/// Create or replace the threshold for a metric. One config per metric;
/// resubmitting updates value and direction in place.
pub async fn upsert_threshold(
    State(state): State<AppState>,
    Json(input): Json<UpsertThreshold>,
) -> AppResult<impl IntoResponse> {
    let threshold = Threshold::new(&input.metric, input.threshold_value, input.direction)?;
    let row = ThresholdRepo::upsert(&state.pool, &threshold).await?;

    tracing::info!(
        metric = %row.metric,
        value = row.threshold_value,
        direction = %row.direction,
        "Threshold configured"
    );

    Ok(Json(DataResponse { data: row }))
}

/// GET /api/v1/thresholds
pub async fn list_thresholds(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = ThresholdRepo::list_all(&state.pool).await?;

    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/thresholds/{metric}
pub async fn get_threshold(
    State(state): State<AppState>,
    Path(metric): Path<String>,
) -> AppResult<impl IntoResponse> {
    let row = ThresholdRepo::find_by_metric(&state.pool, &metric)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Threshold for {metric}")))?;

    Ok(Json(DataResponse { data: row }))
}
