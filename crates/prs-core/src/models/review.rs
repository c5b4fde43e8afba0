//! Review and comment models.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{Dto, User, timestamp};

string_enum! {
    /// Outcome of a submitted review.
    pub enum ReviewState {
        /// The reviewer approved the changes.
        Approved => "APPROVED",
        /// The reviewer asked for changes.
        ChangesRequested => "CHANGES_REQUESTED",
        /// The reviewer left comments only.
        Commented => "COMMENTED",
        /// The review was dismissed.
        Dismissed => "DISMISSED",
        /// The review has not been submitted yet.
        Pending => "PENDING",
    }
}

/// A pull request review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Review ID.
    pub id: u64,

    /// Reviewer.
    pub user: User,

    /// Review summary text.
    #[serde(default)]
    pub body: Option<String>,

    /// Review state.
    pub state: ReviewState,

    /// Review URL.
    pub html_url: String,

    /// When the review was submitted.
    #[serde(with = "timestamp")]
    pub submitted_at: DateTime<FixedOffset>,
}

impl Review {
    /// Whether the review approves the pull request.
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.state == ReviewState::Approved
    }

    /// Whether the review requests changes.
    #[must_use]
    pub fn is_changes_requested(&self) -> bool {
        self.state == ReviewState::ChangesRequested
    }

    /// Whether the review only comments.
    #[must_use]
    pub fn is_commented(&self) -> bool {
        self.state == ReviewState::Commented
    }
}

impl Dto for Review {
    const RESOURCE: &'static str = "review";
}

/// A comment on a pull request, either on the diff or the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment ID.
    pub id: u64,

    /// Author.
    pub user: User,

    /// Comment text.
    pub body: String,

    /// Comment URL.
    pub html_url: String,

    /// Creation time.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<FixedOffset>,

    /// Last edit time.
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<FixedOffset>,
}

impl Dto for Comment {
    const RESOURCE: &'static str = "comment";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_support::user_json;

    fn review_json(state: &str) -> serde_json::Value {
        json!({
            "id": 80,
            "user": user_json(1, "octocat"),
            "body": "Looks good",
            "state": state,
            "html_url": "https://github.com/acme/widgets/pull/7#pullrequestreview-80",
            "submitted_at": "2024-01-16T09:00:00+00:00"
        })
    }

    #[test]
    fn test_review_predicates() {
        let approved = Review::from_value(review_json("APPROVED")).unwrap();
        assert!(approved.is_approved());
        assert!(!approved.is_changes_requested());

        let changes = Review::from_value(review_json("CHANGES_REQUESTED")).unwrap();
        assert!(changes.is_changes_requested());

        let commented = Review::from_value(review_json("COMMENTED")).unwrap();
        assert!(commented.is_commented());
        assert!(!commented.is_approved());
    }

    #[test]
    fn test_unknown_review_state_is_kept() {
        let raw = review_json("SOMETHING_NEW");
        let review = Review::from_value(raw.clone()).unwrap();

        assert_eq!(review.state, ReviewState::Other("SOMETHING_NEW".into()));
        assert!(!review.is_approved() && !review.is_commented() && !review.is_changes_requested());
        assert_eq!(review.to_value(), raw);
    }

    #[test]
    fn test_review_body_may_be_absent() {
        let mut raw = review_json("APPROVED");
        raw.as_object_mut().unwrap().remove("body");

        let review = Review::from_value(raw).unwrap();
        assert_eq!(review.body, None);
        assert_eq!(review.to_value()["body"], json!(null));
    }

    #[test]
    fn test_comment_normalizes_timestamps() {
        let raw = json!({
            "id": 11,
            "user": user_json(1, "octocat"),
            "body": "nit",
            "html_url": "https://github.com/acme/widgets/pull/7#issuecomment-11",
            "created_at": "2024-01-15T10:30:00Z",
            "updated_at": "2024-01-15T11:00:00Z"
        });
        let comment = Comment::from_value(raw).unwrap();
        let value = comment.to_value();

        assert_eq!(value["created_at"], json!("2024-01-15T10:30:00+00:00"));
        assert_eq!(value["updated_at"], json!("2024-01-15T11:00:00+00:00"));
    }

    #[test]
    fn test_comment_bad_timestamp_is_malformed() {
        let raw = json!({
            "id": 11,
            "user": user_json(1, "octocat"),
            "body": "nit",
            "html_url": "https://github.com/acme/widgets/pull/7#issuecomment-11",
            "created_at": "yesterday",
            "updated_at": "2024-01-15T11:00:00Z"
        });
        assert!(matches!(
            Comment::from_value(raw),
            Err(crate::Error::MalformedResponse { resource: "comment", .. })
        ));
    }
}
