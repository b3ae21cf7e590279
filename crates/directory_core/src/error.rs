use thiserror::Error;

/// Why a response body could not be turned into a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedResponseError {
    #[error("response contains no JSON object")]
    NoJson,
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
    #[error("response has no `table` object")]
    MissingTable,
    #[error("table has no `rows` array")]
    MissingRows,
    #[error("source reported an error: {0}")]
    SourceError(String),
    #[error("response body could not be decoded as {encoding}")]
    Undecodable { encoding: String },
}

/// Every way a catalog load can end without a usable catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("network error: {message}")]
    Network { status: Option<u16>, message: String },
    #[error("request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] MalformedResponseError),
    #[error("source contains no programs")]
    EmptyCatalog,
}

impl LoadError {
    /// `true` for a source that was read fine but holds no records.
    pub fn is_no_data(&self) -> bool {
        matches!(self, LoadError::EmptyCatalog)
    }

    /// Short stable label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Network { .. } => "network",
            LoadError::Timeout { .. } => "timeout",
            LoadError::MalformedResponse(_) => "malformed_response",
            LoadError::EmptyCatalog => "empty_catalog",
        }
    }
}
