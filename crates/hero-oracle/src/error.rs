use thiserror::Error;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("Oracle request failed: {0}")]
    Request(String),

    #[error("Oracle endpoint returned status {status}")]
    Status { status: u16 },

    #[error("Oracle returned an unusable payload: {source}")]
    Shape {
        #[source]
        source: serde_json::Error,
    },
}
