//! # prs-core
//!
//! Typed access to GitHub pull requests. Provides immutable models decoded
//! from API responses, an actionable [`PullRequest`] resource, the
//! repository-scoped [`PullRequests`] facade and a fluent [`QueryBuilder`].
//!
//! Every component takes its [`Connector`] explicitly; there is no global
//! default client.

pub mod error;
pub mod models;
pub mod pull_requests;
pub mod query;
pub mod resource;
pub mod types;

#[cfg(test)]
mod test_support;

pub use error::{Error, Result};
pub use prs_github::Connector;
pub use pull_requests::{Filters, PullRequests};
pub use query::QueryBuilder;
pub use resource::PullRequest;
pub use types::{CreatePullRequest, MergeMethod, MergePullRequest, ReviewEvent, UpdatePullRequest};

/// Split an `owner/name` string on its first `/`.
///
/// # Errors
/// Returns [`Error::InvalidRepository`] if there is no `/` or either half
/// is empty.
pub fn split_repository(repository: &str) -> Result<(String, String)> {
    match repository.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() => {
            Ok((owner.to_string(), name.to_string()))
        }
        _ => Err(Error::InvalidRepository(repository.to_string())),
    }
}
