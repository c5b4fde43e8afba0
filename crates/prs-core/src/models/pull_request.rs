//! Pull request model.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{Base, Dto, Head, Label, User, null_as_default, timestamp};

string_enum! {
    /// State of a pull request as reported by GitHub.
    ///
    /// A merged pull request is `closed`; use [`PullRequest::is_merged`].
    pub enum PullRequestState {
        /// Open for review.
        Open => "open",
        /// Closed, merged or not.
        Closed => "closed",
    }
}

/// A pull request snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number.
    pub number: u64,

    /// PR title.
    pub title: String,

    /// PR body/description.
    #[serde(default)]
    pub body: Option<String>,

    /// PR state.
    pub state: PullRequestState,

    /// Author.
    pub user: User,

    /// PR URL.
    pub html_url: String,

    /// Creation time.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<FixedOffset>,

    /// Last update time.
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<FixedOffset>,

    /// When the PR was closed.
    #[serde(default, with = "timestamp::option")]
    pub closed_at: Option<DateTime<FixedOffset>>,

    /// When the PR was merged.
    #[serde(default, with = "timestamp::option")]
    pub merged_at: Option<DateTime<FixedOffset>>,

    /// SHA of the merge (or test-merge) commit.
    #[serde(default)]
    pub merge_commit_sha: Option<String>,

    /// Whether this is a draft PR.
    #[serde(default, deserialize_with = "null_as_default")]
    pub draft: bool,

    /// Primary assignee.
    #[serde(default)]
    pub assignee: Option<User>,

    /// All assignees, in order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub assignees: Vec<User>,

    /// Users whose review has been requested, in order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub requested_reviewers: Vec<User>,

    /// Labels, in order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<Label>,

    /// Source side of the diff.
    pub head: Head,

    /// Target side of the diff.
    pub base: Base,
}

impl PullRequest {
    /// Whether the PR is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == PullRequestState::Open
    }

    /// Whether the PR is closed (merged or not).
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state == PullRequestState::Closed
    }

    /// Whether the PR was merged. Decided by `merged_at` alone.
    #[must_use]
    pub const fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }

    /// Whether the PR is a draft.
    #[must_use]
    pub const fn is_draft(&self) -> bool {
        self.draft
    }

    /// Label names, in order.
    pub fn label_names(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|label| label.name.as_str())
    }
}

impl Dto for PullRequest {
    const RESOURCE: &'static str = "pull request";
}
