use thiserror::Error;

/// Outcome of a lookup that did not produce a weather result.
///
/// The `Display` text is what the user sees; the underlying cause of a
/// fetch failure is only reachable through `source()` for logging.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("City not found.")]
    NotFound,

    #[error("Failed to fetch weather data.")]
    Fetch(#[source] FetchError),
}

/// Why the request/response cycle failed. Never shown to the user.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("endpoint answered with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response is not valid weather JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("lookup task ended before producing a result: {0}")]
    Aborted(String),
}

impl From<FetchError> for LookupError {
    fn from(err: FetchError) -> Self {
        LookupError::Fetch(err)
    }
}
