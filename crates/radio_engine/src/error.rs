use thiserror::Error;

/// Why a schedule could not be fetched.
///
/// The display strings are what the page shows when failures are surfaced
/// instead of masked by the fallback schedule.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("Failed to fetch programs")]
    Status { status: u16 },
    #[error("Failed to parse programs")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid programs endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        FetchError::Transport(Box::new(error))
    }
}
