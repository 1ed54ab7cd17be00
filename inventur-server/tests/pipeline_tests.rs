//! Submission, archive and export pipeline tests against a real database
//!
//! Exercises the library functions directly, without the HTTP layer.

use inventur_common::Error;
use inventur_server::archive::{self, GroupArchiveStatus};
use inventur_server::db::records;
use inventur_server::export::{self, EXPORT_HEADER};
use inventur_server::intake::{self, AssetRow, SubmissionHeader, SubmissionPayload};
use sqlx::SqlitePool;
use std::time::Duration;
use tempfile::TempDir;

async fn setup_pool() -> (TempDir, SqlitePool) {
    let dir = TempDir::new().unwrap();
    let pool = inventur_server::db::init_database(&dir.path().join("inventur.db"))
        .await
        .unwrap();
    (dir, pool)
}

fn payload(asset_ids: &[&str]) -> SubmissionPayload {
    SubmissionPayload {
        header: SubmissionHeader {
            name: "Erika Muster".to_string(),
            department: "Hauptamt".to_string(),
        },
        assets: asset_ids
            .iter()
            .map(|id| AssetRow {
                asset_id: id.to_string(),
                building: "Lutherring 31".to_string(),
                room: "2.14".to_string(),
            })
            .collect(),
    }
}

#[tokio::test]
async fn test_submit_batch_groups_valid_rows() {
    let (_dir, pool) = setup_pool().await;

    let receipt = intake::submit_batch(&pool, &payload(&["A1", " ", "B2"]))
        .await
        .unwrap();

    assert_eq!(receipt.saved_count, 2);

    let stored = records::list_all(&pool).await.unwrap();
    assert_eq!(stored.len(), 2);
    for record in &stored {
        assert_eq!(record.group_id, receipt.group_id);
        assert_eq!(record.submitted_at, receipt.submitted_at);
        assert_eq!(record.submitter_name, "Erika Muster");
        assert_eq!(record.department, "Hauptamt");
        assert!(!record.archived);
    }
}

#[tokio::test]
async fn test_ids_are_not_reused() {
    let (_dir, pool) = setup_pool().await;

    intake::submit_batch(&pool, &payload(&["A"])).await.unwrap();
    let first_id = records::list_all(&pool).await.unwrap()[0].id;

    sqlx::query("DELETE FROM inventory_records").execute(&pool).await.unwrap();
    intake::submit_batch(&pool, &payload(&["B"])).await.unwrap();
    let second_id = records::list_all(&pool).await.unwrap()[0].id;

    assert!(second_id > first_id);
}

#[tokio::test]
async fn test_toggle_item_round_trip_and_missing() {
    let (_dir, pool) = setup_pool().await;
    intake::submit_batch(&pool, &payload(&["PC-1"])).await.unwrap();
    let id = records::list_all(&pool).await.unwrap()[0].id;

    let first = archive::toggle_item(&pool, id).await.unwrap();
    assert!(first.archived);
    assert_eq!(first.asset_id, "PC-1");
    assert_eq!(first.label(), "archiviert");

    let second = archive::toggle_item(&pool, id).await.unwrap();
    assert!(!second.archived);
    assert_eq!(second.label(), "wiederhergestellt");

    assert!(matches!(
        archive::toggle_item(&pool, id + 100).await,
        Err(Error::NotFound(_))
    ));
}

#[tokio::test]
async fn test_toggle_group_reports_previous_status() {
    let (_dir, pool) = setup_pool().await;
    let receipt = intake::submit_batch(&pool, &payload(&["1", "2", "3", "4"]))
        .await
        .unwrap();
    let ids: Vec<i64> = records::list_all(&pool).await.unwrap().iter().map(|r| r.id).collect();

    archive::toggle_item(&pool, ids[0]).await.unwrap();

    let toggle = archive::toggle_group(&pool, &receipt.group_id).await.unwrap();
    assert_eq!(toggle.previous, GroupArchiveStatus::Partial);
    assert!(toggle.archived);
    assert_eq!(toggle.item_count, 4);

    let toggle = archive::toggle_group(&pool, &receipt.group_id).await.unwrap();
    assert_eq!(toggle.previous, GroupArchiveStatus::Archived);
    assert!(!toggle.archived);

    let toggle = archive::toggle_group(&pool, &receipt.group_id).await.unwrap();
    assert_eq!(toggle.previous, GroupArchiveStatus::Active);
    assert!(toggle.archived);

    assert!(records::list_all(&pool).await.unwrap().iter().all(|r| r.archived));
}

#[tokio::test]
async fn test_toggle_unknown_group_is_not_found() {
    let (_dir, pool) = setup_pool().await;

    assert!(matches!(
        archive::toggle_group(&pool, "unknown").await,
        Err(Error::NotFound(_))
    ));
}

#[tokio::test]
async fn test_export_all_order_and_shape() {
    let (_dir, pool) = setup_pool().await;
    intake::submit_batch(&pool, &payload(&["OLD"])).await.unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    intake::submit_batch(&pool, &payload(&["NEW-1", "NEW-2"])).await.unwrap();

    let bytes = export::export_all(&pool).await.unwrap();
    let text = String::from_utf8(bytes.clone()).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3 + 1);
    assert_eq!(lines[0], EXPORT_HEADER.join(";"));
    assert!(lines[1].contains(";NEW-1;"));
    assert!(lines[2].contains(";NEW-2;"));
    assert!(lines[3].contains(";OLD;"));

    assert_eq!(export::export_all(&pool).await.unwrap(), bytes);
}

#[tokio::test]
async fn test_failed_insert_rolls_back_whole_batch() {
    let (_dir, pool) = setup_pool().await;
    sqlx::query(
        "CREATE TRIGGER reject_boom BEFORE INSERT ON inventory_records
         WHEN NEW.asset_id = 'BOOM'
         BEGIN SELECT RAISE(ABORT, 'rejected'); END",
    )
    .execute(&pool)
    .await
    .unwrap();

    let result = intake::submit_batch(&pool, &payload(&["A", "BOOM", "C"])).await;
    assert!(matches!(result, Err(Error::Database(_))));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventory_records")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);

    // The pool still accepts batches afterwards
    let receipt = intake::submit_batch(&pool, &payload(&["D"])).await.unwrap();
    assert_eq!(receipt.saved_count, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_toggles_do_not_fail() {
    let (_dir, pool) = setup_pool().await;
    let receipt = intake::submit_batch(&pool, &payload(&["X1", "X2", "X3"]))
        .await
        .unwrap();
    let ids: Vec<i64> = records::list_all(&pool).await.unwrap().iter().map(|r| r.id).collect();

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..40 {
        let pool = pool.clone();
        let group_id = receipt.group_id.clone();
        let id = ids[i % ids.len()];
        tasks.spawn(async move {
            if i % 2 == 0 {
                archive::toggle_item(&pool, id).await.map(|_| ())
            } else {
                archive::toggle_group(&pool, &group_id).await.map(|_| ())
            }
        });
    }

    let mut completed = 0;
    while let Some(joined) = tasks.join_next().await {
        let result = joined.expect("toggle task panicked");
        assert!(result.is_ok(), "concurrent toggle failed: {:?}", result);
        completed += 1;
    }
    assert_eq!(completed, 40);

    // Unknown group leaves no transaction behind on the pooled connections
    for _ in 0..12 {
        assert!(matches!(
            archive::toggle_group(&pool, "unknown").await,
            Err(Error::NotFound(_))
        ));
    }
    intake::submit_batch(&pool, &payload(&["AFTER"])).await.unwrap();
    archive::toggle_group(&pool, &receipt.group_id).await.unwrap();
}
