//! Request payloads sent to the pull request endpoints.

use serde::{Deserialize, Serialize};

/// Request to create a pull request.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePullRequest {
    /// PR title.
    pub title: String,

    /// Head branch (`branch` or `owner:branch`).
    pub head: String,

    /// Base branch.
    pub base: String,

    /// PR body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Whether to create as draft.
    pub draft: bool,
}

/// Request to update a pull request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePullRequest {
    /// New title (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New body (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// New base branch (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// New state, `open` or `closed` (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Method used to merge a pull request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMethod {
    /// Create a merge commit.
    #[default]
    Merge,
    /// Squash all commits into one.
    Squash,
    /// Rebase commits onto base.
    Rebase,
}

impl MergeMethod {
    /// Wire name of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Squash => "squash",
            Self::Rebase => "rebase",
        }
    }
}

impl std::str::FromStr for MergeMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "merge" => Ok(Self::Merge),
            "squash" => Ok(Self::Squash),
            "rebase" => Ok(Self::Rebase),
            _ => Err(format!(
                "invalid merge method: {s}. Use merge, squash, or rebase."
            )),
        }
    }
}

/// Request to merge a pull request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MergePullRequest {
    /// Merge method.
    pub merge_method: MergeMethod,

    /// Commit title (for squash/merge).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_title: Option<String>,

    /// Commit message (for squash/merge).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
}

impl MergePullRequest {
    /// Merge with the given method and GitHub's default commit text.
    #[must_use]
    pub fn new(merge_method: MergeMethod) -> Self {
        Self {
            merge_method,
            ..Self::default()
        }
    }

    /// Set the commit title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.commit_title = Some(title.into());
        self
    }

    /// Set the commit message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.commit_message = Some(message.into());
        self
    }
}

/// Kind of review to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewEvent {
    /// Approve the changes.
    Approve,
    /// Request changes.
    RequestChanges,
    /// Comment without a verdict.
    Comment,
}
