use reqwest::StatusCode;
use thiserror::Error;

/// Why a fetch of the fact-check list failed.
///
/// The store only keeps the rendered message; the variants exist so sources
/// and their tests can tell the cases apart.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to fetch data (HTTP {})", .0.as_u16())]
    Status(StatusCode),

    #[error("unexpected response shape: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("cannot read fixture: {0}")]
    Fixture(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl FetchError {
    pub fn other(message: impl Into<String>) -> Self {
        FetchError::Other(message.into())
    }
}
