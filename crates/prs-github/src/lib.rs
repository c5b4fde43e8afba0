//! # prs-github
//!
//! GitHub REST transport for prs. Provides the [`Connector`] interface that
//! the pull request layer issues its requests through, and a reqwest-backed
//! [`GitHubClient`] implementing it.
//!
//! # Security
//!
//! Authentication tokens are stored using `SecretString` which zeroizes
//! memory when dropped and never appears in `Debug` output.

mod auth;
mod client;
mod connector;
mod error;
mod query;

pub use auth::Auth;
pub use client::GitHubClient;
pub use connector::Connector;
pub use error::{Error, Result};
pub use query::{QueryParams, encode_path_segment, with_query};
// Re-export SecretString for constructing Auth::Token
pub use secrecy::SecretString;
