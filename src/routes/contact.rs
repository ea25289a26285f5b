use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::json;

use crate::error::AppError;
use crate::models::NewSubmission;
use crate::state::SharedState;

/// Contact-form sink: validate, stamp with the arrival time, append to
/// the backing store.
pub async fn submit(
    State(state): State<SharedState>,
    Json(payload): Json<NewSubmission>,
) -> Result<Response, AppError> {
    payload.validate().map_err(AppError::BadRequest)?;

    let submission = payload.stamp(Utc::now());
    tracing::info!(from = %submission.email, "Contact submission received");

    state.store.append(submission).await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Message saved successfully!" })),
    )
        .into_response())
}
