//! Error types for prs-core.

use thiserror::Error;

/// Result type for prs-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while querying or acting on pull requests.
#[derive(Debug, Error)]
pub enum Error {
    /// A response did not have the shape of the expected resource.
    #[error("malformed {resource} response: {message}")]
    MalformedResponse {
        /// Resource being decoded, e.g. `pull request`.
        resource: &'static str,
        /// Decoder message naming the offending field.
        message: String,
    },

    /// A query was executed before it was fully configured.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A repository was not given as `owner/name`.
    #[error("invalid repository '{0}': expected owner/name")]
    InvalidRepository(String),

    /// A request payload could not be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The transport reported a failure.
    #[error(transparent)]
    Remote(#[from] prs_github::Error),
}

impl Error {
    pub(crate) fn malformed(resource: &'static str, error: &serde_json::Error) -> Self {
        Self::MalformedResponse {
            resource,
            message: error.to_string(),
        }
    }
}
