//! Changed-file model.

use serde::{Deserialize, Serialize};

use super::Dto;

/// A file changed by a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestFile {
    /// Blob SHA.
    pub sha: String,

    /// Path of the file.
    pub filename: String,

    /// Change kind (`added`, `modified`, `removed`, `renamed`, ...).
    pub status: String,

    /// Lines added.
    pub additions: u64,

    /// Lines removed.
    pub deletions: u64,

    /// Total changed lines.
    pub changes: u64,

    /// Unified diff hunk; absent for binary or very large files.
    #[serde(default)]
    pub patch: Option<String>,

    /// Previous path for renamed files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_filename: Option<String>,
}

impl Dto for PullRequestFile {
    const RESOURCE: &'static str = "file";
}
