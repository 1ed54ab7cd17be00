//! CSV download endpoint

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::ApiResult;
use crate::export::{export_all, EXPORT_FILE_NAME};
use crate::AppState;

/// GET /admin/export
///
/// Builds the whole file in memory, then sends it as an attachment.
pub async fn export_csv(State(state): State<AppState>) -> ApiResult<Response> {
    let body = export_all(&state.db).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", EXPORT_FILE_NAME),
            ),
        ],
        body,
    )
        .into_response())
}
