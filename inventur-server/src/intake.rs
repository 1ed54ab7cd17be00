//! Submission aggregation
//!
//! One submission delivers a header (who, which department) and any number
//! of asset rows. Every stored row of a submission gets the same group id and
//! timestamp. Rows whose asset id is blank are dropped before anything is
//! written; the remaining rows are inserted in a single transaction.

use chrono::{DateTime, Utc};
use inventur_common::db::NewInventoryRecord;
use inventur_common::Result;
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::db::records;

/// Header part of a submission
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionHeader {
    pub name: String,
    #[serde(alias = "abteilung")]
    pub department: String,
}

/// One asset row as entered in the form
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRow {
    #[serde(alias = "geraete_id")]
    pub asset_id: String,
    #[serde(alias = "gebaeude")]
    pub building: String,
    #[serde(alias = "raum")]
    pub room: String,
}

/// Body of `POST /submit-all`
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionPayload {
    pub header: SubmissionHeader,
    #[serde(default)]
    pub assets: Vec<AssetRow>,
}

/// Outcome of a stored submission
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub group_id: String,
    pub submitted_at: DateTime<Utc>,
    pub saved_count: usize,
}

/// Turn a payload into insertable records, skipping blank asset ids
///
/// The asset id is stored as entered; trimming only decides whether the row
/// counts as blank.
pub fn prepare_batch(
    payload: &SubmissionPayload,
    group_id: &str,
    submitted_at: DateTime<Utc>,
) -> Vec<NewInventoryRecord> {
    payload
        .assets
        .iter()
        .enumerate()
        .filter_map(|(index, asset)| {
            if asset.asset_id.trim().is_empty() {
                debug!("Skipping row {} of submission {}: empty asset id", index, group_id);
                return None;
            }

            Some(NewInventoryRecord {
                group_id: group_id.to_string(),
                submitted_at,
                submitter_name: payload.header.name.clone(),
                department: payload.header.department.clone(),
                asset_id: asset.asset_id.clone(),
                building: asset.building.clone(),
                room: asset.room.clone(),
            })
        })
        .collect()
}

/// Store a submission; all rows commit together or none do
pub async fn submit_batch(pool: &SqlitePool, payload: &SubmissionPayload) -> Result<SubmissionReceipt> {
    let group_id = Uuid::new_v4().to_string();
    let submitted_at = inventur_common::time::now();

    let batch = prepare_batch(payload, &group_id, submitted_at);

    if !batch.is_empty() {
        let mut tx = pool.begin().await?;
        for record in &batch {
            records::insert_record(&mut tx, record).await?;
        }
        tx.commit().await?;
    }

    info!(
        "Submission {}: {} of {} rows saved",
        group_id,
        batch.len(),
        payload.assets.len()
    );
    debug!(
        "Submission {} from '{}' ({})",
        group_id, payload.header.name, payload.header.department
    );

    Ok(SubmissionReceipt {
        group_id,
        submitted_at,
        saved_count: batch.len(),
    })
}
