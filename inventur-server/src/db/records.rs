//! Inventory record queries
//!
//! Functions taking a `SqliteConnection` are meant to run inside a
//! transaction opened by the caller, so one logical operation commits as
//! one unit. Read-then-write sequences need an `ImmediateTransaction`; a
//! deferred one cannot upgrade to the write lock once another writer has
//! committed.

use inventur_common::db::{InventoryRecord, NewInventoryRecord};
use inventur_common::time::format_timestamp;
use inventur_common::Result;
use sqlx::{SqliteConnection, SqlitePool};

/// Insert one validated record, returning its new id
pub async fn insert_record(conn: &mut SqliteConnection, record: &NewInventoryRecord) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO inventory_records (
            group_id, submitted_at, submitter_name, department,
            asset_id, building, room, archived
        ) VALUES (?, ?, ?, ?, ?, ?, ?, 0)
        "#,
    )
    .bind(&record.group_id)
    .bind(format_timestamp(&record.submitted_at))
    .bind(&record.submitter_name)
    .bind(&record.department)
    .bind(&record.asset_id)
    .bind(&record.building)
    .bind(&record.room)
    .execute(conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// All records, most recent submission first
///
/// Records of the same submission share a timestamp and keep insertion order.
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<InventoryRecord>> {
    let rows = sqlx::query(
        r#"
        SELECT id, group_id, submitted_at, submitter_name, department,
               asset_id, building, room, archived
        FROM inventory_records
        ORDER BY submitted_at DESC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(InventoryRecord::from_row).collect()
}

/// Flip the archived flag of one record in a single statement
///
/// Returns the record's asset id and new flag, or `None` if the id is unknown.
pub async fn flip_item_archived(pool: &SqlitePool, id: i64) -> Result<Option<(String, bool)>> {
    let flipped = sqlx::query_as::<_, (String, bool)>(
        r#"
        UPDATE inventory_records
        SET archived = NOT archived
        WHERE id = ?
        RETURNING asset_id, archived
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(flipped)
}

/// Archived flags of every record in a group (empty if the group is unknown)
pub async fn group_archive_flags(conn: &mut SqliteConnection, group_id: &str) -> Result<Vec<bool>> {
    let flags = sqlx::query_scalar::<_, bool>(
        "SELECT archived FROM inventory_records WHERE group_id = ? ORDER BY id",
    )
    .bind(group_id)
    .fetch_all(conn)
    .await?;

    Ok(flags)
}

/// Set the archived flag on every record of a group, returning the row count
pub async fn set_group_archived(
    conn: &mut SqliteConnection,
    group_id: &str,
    archived: bool,
) -> Result<u64> {
    let result = sqlx::query("UPDATE inventory_records SET archived = ? WHERE group_id = ?")
        .bind(archived)
        .bind(group_id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected())
}
