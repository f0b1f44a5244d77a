use thiserror::Error;

use crate::system::visitor::StorageError;

/// Ошибки обращения к удалённому API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Visitor id unavailable: {0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// True for failures of the remote side or the network, as opposed to
    /// problems on the client.
    pub fn is_remote(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Status { .. })
    }
}
