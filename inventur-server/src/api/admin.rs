//! Admin data and archive endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use inventur_common::db::InventoryRecord;
use serde::Serialize;

use crate::archive;
use crate::db::records;
use crate::error::ApiResult;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ItemToggleResponse {
    pub message: String,
    pub archived: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupToggleResponse {
    pub message: String,
    pub archived: bool,
    pub item_count: u64,
}

/// GET /admin/data
///
/// Every record, newest submission first.
pub async fn get_admin_data(State(state): State<AppState>) -> ApiResult<Json<Vec<InventoryRecord>>> {
    let records = records::list_all(&state.db).await?;
    Ok(Json(records))
}

/// POST /admin/toggle-archive/:item_id
pub async fn toggle_archive(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> ApiResult<Json<ItemToggleResponse>> {
    let toggle = archive::toggle_item(&state.db, item_id).await?;

    Ok(Json(ItemToggleResponse {
        message: format!("Eintrag {} wurde {}.", toggle.asset_id, toggle.label()),
        archived: toggle.archived,
    }))
}

/// POST /admin/toggle-submission/:group_id
pub async fn toggle_submission(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> ApiResult<Json<GroupToggleResponse>> {
    let toggle = archive::toggle_group(&state.db, &group_id).await?;

    Ok(Json(GroupToggleResponse {
        message: format!(
            "Komplette Einreichung ({} Items) wurde {}.",
            toggle.item_count,
            toggle.label()
        ),
        archived: toggle.archived,
        item_count: toggle.item_count,
    }))
}
