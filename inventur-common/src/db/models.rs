//! Database models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row};

use crate::time::parse_timestamp;
use crate::Result;

/// One persisted asset row
///
/// `group_id`, `submitted_at`, `submitter_name` and `department` are copied
/// from the submission header and identical for every record of a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub id: i64,
    pub group_id: String,
    pub submitted_at: DateTime<Utc>,
    pub submitter_name: String,
    pub department: String,
    pub asset_id: String,
    pub building: String,
    pub room: String,
    pub archived: bool,
}

impl InventoryRecord {
    /// Build a record from a `SELECT * FROM inventory_records` row
    pub fn from_row(row: &SqliteRow) -> Result<Self> {
        let submitted_at: String = row.try_get("submitted_at")?;

        Ok(Self {
            id: row.try_get("id")?,
            group_id: row.try_get("group_id")?,
            submitted_at: parse_timestamp(&submitted_at)?,
            submitter_name: row.try_get("submitter_name")?,
            department: row.try_get("department")?,
            asset_id: row.try_get("asset_id")?,
            building: row.try_get("building")?,
            room: row.try_get("room")?,
            archived: row.try_get("archived")?,
        })
    }
}

/// A record that passed validation and is waiting to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInventoryRecord {
    pub group_id: String,
    pub submitted_at: DateTime<Utc>,
    pub submitter_name: String,
    pub department: String,
    pub asset_id: String,
    pub building: String,
    pub room: String,
}
