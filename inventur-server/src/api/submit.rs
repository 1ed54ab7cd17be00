//! Public submission endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;

use crate::error::ApiResult;
use crate::intake::{self, SubmissionPayload};
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub message: String,
    pub saved_count: usize,
}

/// POST /submit-all
///
/// Stores every asset row with a non-blank id under one new submission group.
/// A body that is not a submission is answered with the JSON error shape.
pub async fn submit_all(
    State(state): State<AppState>,
    payload: Result<Json<SubmissionPayload>, JsonRejection>,
) -> ApiResult<Json<SubmitResponse>> {
    let Json(payload) = payload?;
    let receipt = intake::submit_batch(&state.db, &payload).await?;

    Ok(Json(SubmitResponse {
        message: format!("{} Geräte gespeichert.", receipt.saved_count),
        saved_count: receipt.saved_count,
    }))
}
