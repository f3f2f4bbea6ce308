use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::OracleError;
use crate::types::FrequencySignature;
use crate::{Oracle, Result};
use hero_core::hero::{Mantras, StoryArc};

// ---------------------------------------------------------------------------
// RemoteOracle
// ---------------------------------------------------------------------------

/// HTTP client for an external mantra/mythos generator.
///
/// The service receives the frequency signature as JSON and answers with a
/// JSON envelope per endpoint:
///
/// - `POST {base}/v1/mantras` -> `{"mantras": [..4 lines..]}`
/// - `POST {base}/v1/mythos`  -> `{"story": {..7 parts..}}`
///
/// Any transport failure, non-success status, or malformed body surfaces as
/// an [`OracleError`]; callers decide whether to fall back.
#[derive(Debug, Clone)]
pub struct RemoteOracle {
    base_url: String,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
struct MantrasResponse {
    mantras: Mantras,
}

#[derive(Debug, Deserialize)]
struct MythosResponse {
    story: StoryArc,
}

impl RemoteOracle {
    /// Generation can take a while on the far side; allow more headroom than
    /// an ordinary API roundtrip.
    const TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .map_err(|e| OracleError::Request(e.to_string()))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn post<T: DeserializeOwned>(&self, path: &str, signature: &FrequencySignature) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "querying oracle");

        let response = self
            .client
            .post(&url)
            .json(signature)
            .send()
            .map_err(|e| OracleError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OracleError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| OracleError::Request(e.to_string()))?;
        serde_json::from_str(&body).map_err(|source| OracleError::Shape { source })
    }
}

impl Oracle for RemoteOracle {
    fn mantras(&self, signature: &FrequencySignature) -> Result<Mantras> {
        let response: MantrasResponse = self.post("/v1/mantras", signature)?;
        Ok(response.mantras)
    }

    fn mythos(&self, signature: &FrequencySignature) -> Result<StoryArc> {
        let response: MythosResponse = self.post("/v1/mythos", signature)?;
        Ok(response.story)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
