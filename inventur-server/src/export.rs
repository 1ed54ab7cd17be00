//! CSV export of all inventory records
//!
//! Semicolon separated, header row first, newest submission first. Fields
//! are quoted only when they contain the delimiter, a quote or a line break.

use inventur_common::db::InventoryRecord;
use inventur_common::time::format_timestamp;
use inventur_common::{Error, Result};
use sqlx::SqlitePool;

use crate::db::records;

pub const EXPORT_FILE_NAME: &str = "inventur_export.csv";

/// Column labels in output order
pub const EXPORT_HEADER: [&str; 8] = [
    "ID",
    "Timestamp",
    "Submission-ID",
    "Verantwortlicher",
    "Abteilung",
    "Geräte-ID",
    "Gebäude",
    "Raum",
];

pub const EXPORT_DELIMITER: u8 = b';';

/// Render records (already in export order) as CSV bytes
pub fn render_csv(records: &[InventoryRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(EXPORT_DELIMITER)
        .from_writer(Vec::new());

    writer.write_record(EXPORT_HEADER).map_err(csv_error)?;

    for record in records {
        writer
            .write_record([
                record.id.to_string().as_str(),
                format_timestamp(&record.submitted_at).as_str(),
                record.group_id.as_str(),
                record.submitter_name.as_str(),
                record.department.as_str(),
                record.asset_id.as_str(),
                record.building.as_str(),
                record.room.as_str(),
            ])
            .map_err(csv_error)?;
    }

    writer
        .into_inner()
        .map_err(|e| Error::Internal(format!("Failed to finish CSV export: {}", e)))
}

/// Full-table export, archived records included
pub async fn export_all(pool: &SqlitePool) -> Result<Vec<u8>> {
    let records = records::list_all(pool).await?;
    render_csv(&records)
}

fn csv_error(e: csv::Error) -> Error {
    Error::Internal(format!("Failed to write CSV: {}", e))
}
