use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeroError {
    #[error("no journey in progress: run 'herofreq begin'")]
    NotInitialized,

    #[error("invalid gate '{0}': gates run 1 through 64")]
    InvalidGate(String),

    #[error("invalid profile '{0}': not one of the 12 canonical line pairs")]
    InvalidProfile(String),

    #[error("invalid stage: {0}")]
    InvalidStage(String),

    #[error("invalid hero type: {0}")]
    InvalidHeroType(String),

    #[error("invalid authority: {0}")]
    InvalidAuthority(String),

    #[error("invalid flow: {0}")]
    InvalidFlow(String),

    #[error("invalid user id '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidUserId(String),

    #[error("invalid transition from {from} to {to}: {reason}")]
    InvalidTransition {
        from: String,
        to: String,
        reason: String,
    },

    #[error("journey incomplete: identity, mantras and story are required")]
    JourneyIncomplete,

    #[error("shared frequency not found")]
    SnapshotDecode,

    #[error("session not found for user: {0}")]
    SessionNotFound(String),

    #[error("session file corrupt at {path}: {detail}")]
    CorruptSession { path: String, detail: String },

    #[error("remote session store error: {0}")]
    RemoteStore(String),

    #[error("session database error: {0}")]
    Database(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HeroError>;
