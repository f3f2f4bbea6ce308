//! Persistent session storage using redb.
//!
//! A single `SESSIONS` table maps user id to a JSON-encoded row. The row id
//! is minted on first write and survives every later upsert, so clients can
//! treat it as a stable handle for one user's journey.

use std::path::Path;

use chrono::{DateTime, Utc};
use redb::{Database, TableDefinition};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hero_core::error::{HeroError, Result};
use hero_core::hero::HeroData;
use hero_core::paths::validate_user_id;
use hero_core::session::SessionRecord;
use hero_core::types::Stage;

// ---------------------------------------------------------------------------
// Table definition
// ---------------------------------------------------------------------------

/// Key: user id. Value: JSON-encoded StoredSession.
const SESSIONS: TableDefinition<&str, &[u8]> = TableDefinition::new("sessions");

// ---------------------------------------------------------------------------
// StoredSession
// ---------------------------------------------------------------------------

/// One user's journey as stored and served by the API.
///
/// This is the client-visible row shape: the [`SessionRecord`] fields plus
/// the row id and owning user id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    pub id: Uuid,
    pub user_id: String,
    pub active_step: Stage,
    pub hero_data: HeroData,
    pub updated_at: DateTime<Utc>,
}

impl StoredSession {
    fn from_record(id: Uuid, user_id: &str, record: SessionRecord) -> Self {
        Self {
            id,
            user_id: user_id.to_string(),
            active_step: record.active_step,
            hero_data: record.hero_data,
            updated_at: record.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// SessionDb
// ---------------------------------------------------------------------------

/// Store for journey sessions, keyed by user id.
pub struct SessionDb {
    db: Database,
}

fn db_err(e: impl std::fmt::Display) -> HeroError {
    HeroError::Database(e.to_string())
}

impl SessionDb {
    /// Open or create the redb database at `path`.
    ///
    /// Creates the parent directory and the `SESSIONS` table if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            hero_core::io::ensure_dir(parent)?;
        }
        let db = Database::create(path).map_err(db_err)?;
        // Ensure the table exists before any reads
        let wt = db.begin_write().map_err(db_err)?;
        wt.open_table(SESSIONS).map_err(db_err)?;
        wt.commit().map_err(db_err)?;
        Ok(Self { db })
    }

    /// Fetch the stored session for `user_id`, if any.
    pub fn get(&self, user_id: &str) -> Result<Option<StoredSession>> {
        validate_user_id(user_id)?;
        let rt = self.db.begin_read().map_err(db_err)?;
        let table = rt.open_table(SESSIONS).map_err(db_err)?;
        let Some(value) = table.get(user_id).map_err(db_err)? else {
            return Ok(None);
        };
        let row: StoredSession = serde_json::from_slice(value.value()).map_err(db_err)?;
        Ok(Some(row))
    }

    /// Write `record` as the session for `user_id`, creating or replacing.
    ///
    /// A fresh row id is minted on first write; later upserts keep it.
    pub fn upsert(&self, user_id: &str, record: SessionRecord) -> Result<StoredSession> {
        validate_user_id(user_id)?;
        let id = self
            .get(user_id)?
            .map(|existing| existing.id)
            .unwrap_or_else(Uuid::new_v4);
        let row = StoredSession::from_record(id, user_id, record);
        let value = serde_json::to_vec(&row).map_err(db_err)?;

        let wt = self.db.begin_write().map_err(db_err)?;
        {
            let mut table = wt.open_table(SESSIONS).map_err(db_err)?;
            table.insert(user_id, value.as_slice()).map_err(db_err)?;
        }
        wt.commit().map_err(db_err)?;
        Ok(row)
    }

    /// Remove the session for `user_id`. Returns whether a row existed.
    pub fn delete(&self, user_id: &str) -> Result<bool> {
        validate_user_id(user_id)?;
        let wt = self.db.begin_write().map_err(db_err)?;
        let existed;
        {
            let mut table = wt.open_table(SESSIONS).map_err(db_err)?;
            existed = table.remove(user_id).map_err(db_err)?.is_some();
        }
        wt.commit().map_err(db_err)?;
        Ok(existed)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
