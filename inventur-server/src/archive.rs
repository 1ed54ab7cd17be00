//! Archive state management
//!
//! Records are never deleted; they are archived. A single record can be
//! flipped on its own, or a whole submission group can be flipped at once.
//!
//! Group rule: a fully archived group is restored, any other group (nothing
//! archived, or only part of it) is archived completely. Flipping a single
//! record does not touch the rest of its group, so groups can end up mixed.

use inventur_common::{Error, Result};
use sqlx::SqlitePool;
use tracing::info;

use crate::db::{records, ImmediateTransaction};

/// Archive status of a submission group, derived from its records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupArchiveStatus {
    /// No record archived
    Active,
    /// Some but not all records archived
    Partial,
    /// Every record archived
    Archived,
}

impl GroupArchiveStatus {
    /// Derive the status from the records' flags; `None` for an empty group
    pub fn from_flags<I>(flags: I) -> Option<Self>
    where
        I: IntoIterator<Item = bool>,
    {
        let (mut total, mut archived) = (0usize, 0usize);
        for flag in flags {
            total += 1;
            archived += usize::from(flag);
        }

        match (total, archived) {
            (0, _) => None,
            (_, 0) => Some(Self::Active),
            (t, a) if t == a => Some(Self::Archived),
            _ => Some(Self::Partial),
        }
    }

    /// Archived flag every record gets when the group is toggled
    pub fn next_state(self) -> bool {
        match self {
            Self::Archived => false,
            Self::Active | Self::Partial => true,
        }
    }
}

/// User-facing wording for an archived flag
pub fn state_label(archived: bool) -> &'static str {
    if archived {
        "archiviert"
    } else {
        "wiederhergestellt"
    }
}

/// Result of flipping one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemToggle {
    pub id: i64,
    pub asset_id: String,
    pub archived: bool,
}

impl ItemToggle {
    pub fn label(&self) -> &'static str {
        state_label(self.archived)
    }
}

/// Result of flipping a submission group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupToggle {
    pub group_id: String,
    pub previous: GroupArchiveStatus,
    pub archived: bool,
    pub item_count: u64,
}

impl GroupToggle {
    pub fn label(&self) -> &'static str {
        state_label(self.archived)
    }
}

/// Flip the archived flag of one record
pub async fn toggle_item(pool: &SqlitePool, id: i64) -> Result<ItemToggle> {
    let (asset_id, archived) = records::flip_item_archived(pool, id)
        .await?
        .ok_or_else(|| Error::NotFound("Item not found".to_string()))?;

    info!("Record {} ({}) {}", id, asset_id, state_label(archived));

    Ok(ItemToggle {
        id,
        asset_id,
        archived,
    })
}

/// Flip a whole submission group according to the group rule
///
/// The status read and the update run in one immediate transaction, so
/// concurrent toggles queue on the write lock; the last one to commit wins.
pub async fn toggle_group(pool: &SqlitePool, group_id: &str) -> Result<GroupToggle> {
    let mut tx = ImmediateTransaction::begin(pool).await?;

    let conn = tx.connection()?;
    let flags = records::group_archive_flags(&mut *conn, group_id).await?;
    let previous = GroupArchiveStatus::from_flags(flags)
        .ok_or_else(|| Error::NotFound("Submission not found".to_string()))?;

    let archived = previous.next_state();
    let item_count = records::set_group_archived(&mut *conn, group_id, archived).await?;
    tx.commit().await?;

    info!(
        "Submission {} ({:?}, {} records) {}",
        group_id,
        previous,
        item_count,
        state_label(archived)
    );

    Ok(GroupToggle {
        group_id: group_id.to_string(),
        previous,
        archived,
        item_count,
    })
}
