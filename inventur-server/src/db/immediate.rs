//! Write-locked transactions
//!
//! `pool.begin()` opens a deferred transaction: a read followed by a write
//! fails with SQLITE_BUSY if another writer committed in between, without
//! waiting on the busy timeout. `BEGIN IMMEDIATE` takes the write lock up
//! front, so it waits on the busy timeout like any other writer.

use inventur_common::{Error, Result};
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection, SqlitePool};
use tracing::warn;

/// Transaction holding the database write lock from its first statement
///
/// Dropped without `commit` (error or cancelled request), it rolls back
/// before the connection returns to the pool.
pub struct ImmediateTransaction {
    conn: Option<PoolConnection<Sqlite>>,
}

impl ImmediateTransaction {
    pub async fn begin(pool: &SqlitePool) -> Result<Self> {
        let mut conn = pool.acquire().await?;
        sqlx::query("BEGIN IMMEDIATE").execute(&mut *conn).await?;
        Ok(Self { conn: Some(conn) })
    }

    /// Connection to run statements on inside the transaction
    pub fn connection(&mut self) -> Result<&mut SqliteConnection> {
        self.conn
            .as_deref_mut()
            .ok_or_else(|| Error::Internal("Transaction already finished".to_string()))
    }

    pub async fn commit(mut self) -> Result<()> {
        let Some(mut conn) = self.conn.take() else {
            return Ok(());
        };

        if let Err(e) = sqlx::query("COMMIT").execute(&mut *conn).await {
            // Leave the rollback to Drop
            self.conn = Some(conn);
            return Err(e.into());
        }

        Ok(())
    }
}

impl Drop for ImmediateTransaction {
    fn drop(&mut self) {
        let Some(mut conn) = self.conn.take() else {
            return;
        };

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(e) = sqlx::query("ROLLBACK").execute(&mut *conn).await {
                        warn!("Rollback failed, discarding connection: {}", e);
                        // Closing the connection ends the transaction
                        drop(conn.detach());
                    }
                });
            }
            Err(_) => drop(conn.detach()),
        }
    }
}
