//! Handlers for alert queries.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use gridwatch_db::models::alert::AlertRow;
use gridwatch_db::repositories::AlertRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Default lookback window for `/alerts/recent`.
const DEFAULT_WINDOW_SECS: i64 = 60;

/// Query parameters for the recent alert endpoint.
#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    /// Lookback window in seconds (default 60).
    pub seconds: Option<i64>,
}

/// Response payload for `/alerts/recent`.
#[derive(Debug, Serialize)]
pub struct RecentAlertsResponse {
    pub message: String,
    pub count: usize,
    pub alerts: Vec<AlertRow>,
}

/// GET /api/v1/alerts/recent?seconds=N
///
/// Alerts triggered within the last N seconds, newest first.
pub async fn recent_alerts(
    State(state): State<AppState>,
    Query(params): Query<RecentQuery>,
) -> AppResult<impl IntoResponse> {
    let seconds = params.seconds.unwrap_or(DEFAULT_WINDOW_SECS);
    if seconds <= 0 {
        return Err(AppError::BadRequest("seconds must be positive".into()));
    }

    // try_seconds: a window near i64::MAX overflows chrono's millisecond
    // representation and must be rejected, not panic.
    let window = Duration::try_seconds(seconds)
        .ok_or_else(|| AppError::BadRequest("seconds is too large".into()))?;
    let since = Utc::now() - window;
    let alerts = AlertRepo::list_since(&state.pool, since).await?;

    let message = if alerts.is_empty() {
        "No alerts found.".to_string()
    } else {
        format!("{} alerts fetched successfully.", alerts.len())
    };

    Ok(Json(RecentAlertsResponse {
        message,
        count: alerts.len(),
        alerts,
    }))
}
