//! Error types for API clients

/// Failure modes of a client wrapper call.
///
/// `Status` and `Schema` are deliberately distinct: the former is the server
/// answering with a non-success code, the latter is a contract mismatch - a
/// 2xx body that does not have the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Response shape mismatch: {0}")]
    Schema(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(String),
}

impl ClientError {
    /// Whether the failure is a server-contract mismatch rather than a
    /// transport or status problem.
    pub fn is_schema(&self) -> bool {
        matches!(self, ClientError::Schema(_))
    }
}
