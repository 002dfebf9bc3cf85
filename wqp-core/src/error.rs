/// Error types for data endpoint fetches
use thiserror::Error;

/// A fetch that produced no usable data.
///
/// An empty result set is not an error: endpoints return `Ok(vec![])` for
/// "no data for this filter".
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never completed or the endpoint answered with a non-success status
    #[error("network failure: {0}")]
    NetworkFailure(String),

    /// The body was not JSON or did not have the expected shape
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::MalformedResponse(err.to_string())
    }
}

/// Type alias for Results using FetchError
pub type Result<T> = std::result::Result<T, FetchError>;
