use crate::error::{HeroError, Result};
use crate::paths;
use crate::session::SessionRecord;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

// ---------------------------------------------------------------------------
// RecordStore
// ---------------------------------------------------------------------------

/// Remote half of the session store, keyed by user id: one record per user,
/// upserted in place. Absence is `Ok(None)`, never an error; errors mean
/// the store itself misbehaved.
pub trait RecordStore {
    fn get_session(&self, user_id: &str) -> Result<Option<SessionRecord>>;
    fn save_session(&self, user_id: &str, record: &SessionRecord) -> Result<SessionRecord>;
    fn delete_session(&self, user_id: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// HttpRecordStore
// ---------------------------------------------------------------------------

/// Talks to a hero-server instance over its sessions API.
pub struct HttpRecordStore {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpRecordStore {
    pub fn new(base_url: impl Into<String>) -> Result<HttpRecordStore> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(remote_err)?;
        Ok(HttpRecordStore {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn session_url(&self, user_id: &str) -> String {
        format!("{}/api/sessions/{}", self.base_url, user_id)
    }
}

fn remote_err(e: reqwest::Error) -> HeroError {
    HeroError::RemoteStore(e.to_string())
}

impl RecordStore for HttpRecordStore {
    fn get_session(&self, user_id: &str) -> Result<Option<SessionRecord>> {
        paths::validate_user_id(user_id)?;
        let url = self.session_url(user_id);
        let resp = self.client.get(&url).send().map_err(remote_err)?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(HeroError::RemoteStore(format!(
                "GET {url} returned {}",
                resp.status()
            )));
        }
        // The stored row carries id and userId alongside the record fields;
        // extra keys fall away here.
        let record = resp.json::<SessionRecord>().map_err(remote_err)?;
        Ok(Some(record))
    }

    fn save_session(&self, user_id: &str, record: &SessionRecord) -> Result<SessionRecord> {
        paths::validate_user_id(user_id)?;
        let url = self.session_url(user_id);
        let resp = self
            .client
            .put(&url)
            .json(record)
            .send()
            .map_err(remote_err)?;
        if !resp.status().is_success() {
            return Err(HeroError::RemoteStore(format!(
                "PUT {url} returned {}",
                resp.status()
            )));
        }
        resp.json::<SessionRecord>().map_err(remote_err)
    }

    fn delete_session(&self, user_id: &str) -> Result<()> {
        paths::validate_user_id(user_id)?;
        let url = self.session_url(user_id);
        let resp = self.client.delete(&url).send().map_err(remote_err)?;
        // Deleting what is already gone is a success.
        if resp.status() == StatusCode::NOT_FOUND || resp.status().is_success() {
            return Ok(());
        }
        Err(HeroError::RemoteStore(format!(
            "DELETE {url} returned {}",
            resp.status()
        )))
    }
}

// ---------------------------------------------------------------------------
// MemoryRecordStore
// ---------------------------------------------------------------------------

/// In-process store. Backs tests and embedded setups with no server.
#[derive(Default)]
pub struct MemoryRecordStore {
    sessions: Mutex<HashMap<String, SessionRecord>>,
}

impl MemoryRecordStore {
    pub fn new() -> MemoryRecordStore {
        MemoryRecordStore::default()
    }

    fn locked(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, SessionRecord>>> {
        self.sessions
            .lock()
            .map_err(|_| HeroError::Database("session map poisoned".to_string()))
    }
}

impl RecordStore for MemoryRecordStore {
    fn get_session(&self, user_id: &str) -> Result<Option<SessionRecord>> {
        paths::validate_user_id(user_id)?;
        Ok(self.locked()?.get(user_id).cloned())
    }

    fn save_session(&self, user_id: &str, record: &SessionRecord) -> Result<SessionRecord> {
        paths::validate_user_id(user_id)?;
        self.locked()?
            .insert(user_id.to_string(), record.clone());
        Ok(record.clone())
    }

    fn delete_session(&self, user_id: &str) -> Result<()> {
        paths::validate_user_id(user_id)?;
        self.locked()?.remove(user_id);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
