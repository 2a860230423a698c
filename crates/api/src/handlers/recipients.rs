//! Handlers for the notification recipient directory.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use gridwatch_db::models::recipient::CreateRecipient;
use gridwatch_db::repositories::RecipientRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/recipients
///
/// Register a recipient. Duplicate emails are rejected with 409.
pub async fn create_recipient(
    State(state): State<AppState>,
    Json(input): Json<CreateRecipient>,
) -> AppResult<impl IntoResponse> {
    if input.email.trim().is_empty() {
        return Err(AppError::BadRequest("email must not be empty".into()));
    }

    let recipient = RecipientRepo::create(&state.pool, &input).await?;

    tracing::info!(email = %recipient.email, "Recipient registered");

    Ok((StatusCode::CREATED, Json(DataResponse { data: recipient })))
}

/// GET /api/v1/recipients
pub async fn list_recipients(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let recipients = RecipientRepo::list_all(&state.pool).await?;

    Ok(Json(DataResponse { data: recipients }))
}
