use crate::error::{HeroError, Result};
use crate::hero::HeroData;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// A decoded share token: a read-only copy of someone's completed hero
/// data. Not a session record; it cannot be resumed or mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    data: HeroData,
}

impl Snapshot {
    pub fn hero(&self) -> &HeroData {
        &self.data
    }
}

// ---------------------------------------------------------------------------
// Codec
// ---------------------------------------------------------------------------

/// Encode a completed journey as an opaque URL-safe token: JSON, then
/// unpadded URL-safe base64. The token carries the whole payload; there is
/// no server-side lookup and no integrity check.
pub fn encode(data: &HeroData) -> Result<String> {
    if !data.is_complete() {
        return Err(HeroError::JourneyIncomplete);
    }
    let json = serde_json::to_vec(data)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decode a share token. Accepts any well-formed hero data payload, full
/// or partial; everything else collapses into `SnapshotDecode`, which
/// viewers render as a not-found state.
pub fn decode(token: &str) -> Result<Snapshot> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token.trim())
        .map_err(|_| HeroError::SnapshotDecode)?;
    let data: HeroData =
        serde_json::from_slice(&bytes).map_err(|_| HeroError::SnapshotDecode)?;
    Ok(Snapshot { data })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
