//! Error types for the GitHub transport.

use thiserror::Error;

/// Result type for transport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while talking to the GitHub API.
///
/// These are surfaced unchanged by every layer built on top of the
/// transport. Nothing here is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body was not valid JSON.
    #[error("invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),

    /// GitHub rejected the credentials (HTTP 401).
    #[error("authentication failed - check your token")]
    AuthenticationFailed,

    /// GitHub answered with a non-success status.
    #[error("GitHub API error ({status}): {message}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        message: String,
    },

    /// No token could be found by any configured source.
    #[error("no GitHub token found - set GITHUB_TOKEN or run `gh auth login`")]
    NoToken,

    /// Running an external credential helper failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status code for errors that carry one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::AuthenticationFailed => Some(401),
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
