//! Repository, label and branch endpoint models.

use serde::{Deserialize, Serialize};

use super::{Dto, User};

/// A repository as embedded in pull request responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository ID.
    pub id: u64,

    /// Short name.
    pub name: String,

    /// `owner/name`.
    pub full_name: String,

    /// Repository URL.
    pub html_url: String,

    /// Whether the repository is private.
    pub private: bool,
}

impl Dto for Repository {
    const RESOURCE: &'static str = "repository";
}

/// An issue/pull request label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label ID.
    pub id: u64,

    /// Label name.
    pub name: String,

    /// Hex color without a leading `#`. Not validated.
    pub color: String,

    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Dto for Label {
    const RESOURCE: &'static str = "label";
}

/// One side of a pull request's diff: a ref at a commit in a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Head {
    /// Branch name.
    #[serde(rename = "ref")]
    pub ref_name: String,

    /// Commit SHA the ref points at.
    pub sha: String,

    /// Owner of this side.
    pub user: User,

    /// Repository this side lives in.
    pub repo: Repository,
}

/// The base side of a pull request. Same shape as [`Head`].
pub type Base = Head;

impl Dto for Head {
    const RESOURCE: &'static str = "branch";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Error;
    use crate::test_support::{branch_json, label_json};

    #[test]
    fn test_label_without_description() {
        let raw = json!({"id": 3, "name": "bug", "color": "d73a4a"});
        let label = Label::from_value(raw).unwrap();

        assert_eq!(label.description, None);
        assert_eq!(
            label.to_value(),
            json!({"id": 3, "name": "bug", "color": "d73a4a", "description": null})
        );
    }

    #[test]
    fn test_label_round_trip() {
        let raw = label_json(4, "enhancement");
        assert_eq!(Label::from_value(raw.clone()).unwrap().to_value(), raw);
    }

    #[test]
    fn test_branch_round_trip() {
        let raw = branch_json("feature/x", "abc123");
        let head = Head::from_value(raw.clone()).unwrap();

        assert_eq!(head.ref_name, "feature/x");
        assert_eq!(head.repo.full_name, "acme/widgets");
        assert_eq!(head.to_value(), raw);
    }

    #[test]
    fn test_branch_missing_sha_is_malformed() {
        let mut raw = branch_json("feature/x", "abc123");
        raw.as_object_mut().unwrap().remove("sha");

        let err = Head::from_value(raw).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
        assert!(err.to_string().contains("sha"));
    }

    #[test]
    fn test_repository_requires_private_flag() {
        let raw = json!({
            "id": 1,
            "name": "widgets",
            "full_name": "acme/widgets",
            "html_url": "https://github.com/acme/widgets"
        });
        assert!(Repository::from_value(raw).is_err());
    }
}
