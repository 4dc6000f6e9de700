#[derive(Debug, thiserror::Error)]
pub enum InsightsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record source unavailable (status {status}): {details}")]
    SourceUnavailable { status: u16, details: String },

    #[error("Malformed snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl InsightsError {
    /// Whether the error came from fetching the snapshot rather than from
    /// misuse of the SDK itself.
    pub fn is_source_failure(&self) -> bool {
        !matches!(self, InsightsError::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, InsightsError>;
