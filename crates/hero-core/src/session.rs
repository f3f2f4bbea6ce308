use crate::error::{HeroError, Result};
use crate::hero::HeroData;
use crate::io::atomic_write;
use crate::paths;
use crate::types::Stage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// SessionRecord
// ---------------------------------------------------------------------------

/// The persisted unit of recovery: where the journey is and everything it
/// has collected. Written after each completed forward transition, so a
/// reload lands exactly one step behind nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub active_step: Stage,
    pub hero_data: HeroData,
    pub updated_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(active_step: Stage, hero_data: HeroData) -> SessionRecord {
        SessionRecord {
            active_step,
            hero_data,
            updated_at: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// SessionFile
// ---------------------------------------------------------------------------

/// Local half of the session store: one JSON record per journey root.
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(root: &Path) -> SessionFile {
        SessionFile {
            path: paths::session_path(root),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means no session. A file that exists but does not parse
    /// is reported, not silently discarded.
    pub fn load(&self) -> Result<Option<SessionRecord>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            other => other?,
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| HeroError::CorruptSession {
                path: self.path.display().to_string(),
                detail: e.to_string(),
            })
    }

    pub fn save(&self, record: &SessionRecord) -> Result<()> {
        let json = serde_json::to_vec_pretty(record)?;
        atomic_write(&self.path, &json)
    }

    /// Idempotent: clearing an absent session is fine.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            other => Ok(other?),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
