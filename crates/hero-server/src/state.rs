use std::path::PathBuf;
use std::sync::Arc;

use hero_core::error::Result;
use hero_core::paths;

use crate::db::SessionDb;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub root: PathBuf,
    pub db: Arc<SessionDb>,
}

impl AppState {
    /// Open (or create) the session database under `root`.
    pub fn new(root: PathBuf) -> Result<Self> {
        let db = SessionDb::open(&paths::sessions_db_path(&root))?;
        Ok(Self {
            root,
            db: Arc::new(db),
        })
    }
}
