//! Actionable pull request resource.
//!
//! [`PullRequest`] binds a [`models::PullRequest`] snapshot to the
//! repository it lives in and the connector used to reach it. Mutating
//! methods go straight to GitHub and return the resource for chaining; they
//! never touch the held snapshot. Call [`PullRequest::refresh`] for fresh
//! state.

use std::ops::Deref;

use prs_github::{Connector, encode_path_segment};
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::error::{Error, Result};
use crate::models::{self, CheckRun, Comment, Dto, PullRequestFile, Review};
use crate::types::{MergePullRequest, ReviewEvent};

/// A pull request bound to its repository and connector.
///
/// Fields of the snapshot are readable directly through `Deref`:
/// `pr.number`, `pr.title`, `pr.is_merged()`.
pub struct PullRequest<'a, C> {
    client: &'a C,
    owner: String,
    repo: String,
    data: models::PullRequest,
}

impl<'a, C: Connector> PullRequest<'a, C> {
    /// Bind a snapshot to `owner/repo` on `client`.
    pub fn new(
        client: &'a C,
        owner: impl Into<String>,
        repo: impl Into<String>,
        data: models::PullRequest,
    ) -> Self {
        Self {
            client,
            owner: owner.into(),
            repo: repo.into(),
            data,
        }
    }

    /// The snapshot this resource was built from.
    #[must_use]
    pub const fn data(&self) -> &models::PullRequest {
        &self.data
    }

    /// Give up the binding and keep the snapshot.
    #[must_use]
    pub fn into_data(self) -> models::PullRequest {
        self.data
    }

    /// Repository owner.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Encode the snapshot in its wire shape.
    #[must_use]
    pub fn to_value(&self) -> Value {
        self.data.to_value()
    }

    fn pulls_path(&self, suffix: &str) -> String {
        format!(
            "/repos/{}/{}/pulls/{}{suffix}",
            self.owner, self.repo, self.data.number
        )
    }

    fn issues_path(&self, suffix: &str) -> String {
        format!(
            "/repos/{}/{}/issues/{}{suffix}",
            self.owner, self.repo, self.data.number
        )
    }

    /// Fetch the current state into a new resource.
    ///
    /// # Errors
    /// Returns error if the request fails or the response is malformed.
    pub async fn refresh(&self) -> Result<Self> {
        let response = self.client.get(&self.pulls_path("")).await?;
        Ok(Self::new(
            self.client,
            self.owner.clone(),
            self.repo.clone(),
            models::PullRequest::from_value(response)?,
        ))
    }

    // === Reviews ===

    /// Approve, with an optional review body.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn approve(&self, body: Option<&str>) -> Result<&Self> {
        self.create_review(ReviewEvent::Approve, body).await?;
        Ok(self)
    }

    /// Request changes.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn request_changes(&self, body: &str) -> Result<&Self> {
        self.create_review(ReviewEvent::RequestChanges, Some(body)).await?;
        Ok(self)
    }

    async fn create_review(&self, event: ReviewEvent, body: Option<&str>) -> Result<()> {
        tracing::debug!(
            owner = %self.owner,
            repo = %self.repo,
            number = self.data.number,
            ?event,
            "submitting review"
        );

        let mut payload = Map::new();
        payload.insert("event".into(), json!(event));
        if let Some(body) = body {
            payload.insert("body".into(), json!(body));
        }

        self.client
            .post(&self.pulls_path("/reviews"), &Value::Object(payload))
            .await?;
        Ok(())
    }

    // === Comments ===

    /// Comment on the pull request.
    ///
    /// With both `line` and `path` the comment is anchored to that line of
    /// the diff. If either is missing it becomes a conversation comment.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn comment(
        &self,
        body: &str,
        line: Option<u64>,
        path: Option<&str>,
    ) -> Result<&Self> {
        match (line, path) {
            (Some(line), Some(path)) => {
                tracing::debug!(number = self.data.number, path, line, "posting review comment");
                self.client
                    .post(
                        &self.pulls_path("/comments"),
                        &json!({ "body": body, "path": path, "line": line }),
                    )
                    .await?;
            }
            _ => {
                tracing::debug!(number = self.data.number, "posting issue comment");
                self.client
                    .post(&self.issues_path("/comments"), &json!({ "body": body }))
                    .await?;
            }
        }
        Ok(self)
    }

    // === State changes ===

    /// Merge the pull request.
    ///
    /// A refusal from GitHub (conflicts, failing required checks, missing
    /// permission) is returned as the transport error.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn merge(&self, request: &MergePullRequest) -> Result<&Self> {
        tracing::debug!(
            number = self.data.number,
            method = request.merge_method.as_str(),
            "merging pull request"
        );
        let body = serde_json::to_value(request).map_err(Error::Encode)?;
        self.client.put(&self.pulls_path("/merge"), &body).await?;
        Ok(self)
    }

    /// Close without merging.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn close(&self) -> Result<&Self> {
        self.update(&json!({ "state": "closed" })).await
    }

    /// Reopen a closed pull request.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn reopen(&self) -> Result<&Self> {
        self.update(&json!({ "state": "open" })).await
    }

    /// Send a partial update. `attributes` is passed through unvalidated.
    ///
    /// # Errors
    /// Returns error if `attributes` cannot be encoded or the request fails.
    pub async fn update<A: Serialize + ?Sized>(&self, attributes: &A) -> Result<&Self> {
        let body = serde_json::to_value(attributes).map_err(Error::Encode)?;
        tracing::debug!(number = self.data.number, "updating pull request");
        self.client.patch(&self.pulls_path(""), &body).await?;
        Ok(self)
    }

    // === Reads ===

    /// Reviews submitted on the pull request (first page).
    ///
    /// # Errors
    /// Returns error if the request fails or the response is malformed.
    pub async fn reviews(&self) -> Result<Vec<Review>> {
        let response = self.client.get(&self.pulls_path("/reviews")).await?;
        Review::from_value_list(response)
    }

    /// Diff comments on the pull request (first page).
    ///
    /// # Errors
    /// Returns error if the request fails or the response is malformed.
    pub async fn comments(&self) -> Result<Vec<Comment>> {
        let response = self.client.get(&self.pulls_path("/comments")).await?;
        Comment::from_value_list(response)
    }

    /// Conversation comments on the pull request (first page).
    ///
    /// # Errors
    /// Returns error if the request fails or the response is malformed.
    pub async fn comment_thread(&self) -> Result<Vec<Comment>> {
        let response = self.client.get(&self.issues_path("/comments")).await?;
        Comment::from_value_list(response)
    }

    /// Files changed by the pull request (first page).
    ///
    /// # Errors
    /// Returns error if the request fails or the response is malformed.
    pub async fn files(&self) -> Result<Vec<PullRequestFile>> {
        let response = self.client.get(&self.pulls_path("/files")).await?;
        PullRequestFile::from_value_list(response)
    }

    /// Check runs on the head commit.
    ///
    /// # Errors
    /// Returns error if the request fails or the response is malformed.
    pub async fn checks(&self) -> Result<Vec<CheckRun>> {
        let path = format!(
            "/repos/{}/{}/commits/{}/check-runs",
            self.owner, self.repo, self.data.head.sha
        );
        let mut response = self.client.get(&path).await?;

        match response.get_mut("check_runs").map(Value::take) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(runs) => CheckRun::from_value_list(runs),
        }
    }

    // === Labels ===

    /// Add labels by name.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn add_labels<S: AsRef<str>>(&self, labels: &[S]) -> Result<&Self> {
        let labels: Vec<&str> = labels.iter().map(AsRef::as_ref).collect();
        self.client
            .post(&self.issues_path("/labels"), &json!({ "labels": labels }))
            .await?;
        Ok(self)
    }

    /// Remove one label by name.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn remove_label(&self, label: &str) -> Result<&Self> {
        let path = self.issues_path(&format!("/labels/{}", encode_path_segment(label)));
        self.client.delete(&path, None).await?;
        Ok(self)
    }

    // === Reviewers ===

    /// Request reviews from users and teams.
    ///
    /// Empty lists are left out of the payload; the request is sent even
    /// when both are empty.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn add_reviewers<S: AsRef<str>, T: AsRef<str>>(
        &self,
        reviewers: &[S],
        team_reviewers: &[T],
    ) -> Result<&Self> {
        let payload = reviewers_payload(reviewers, team_reviewers);
        self.client
            .post(&self.pulls_path("/requested_reviewers"), &payload)
            .await?;
        Ok(self)
    }

    /// Withdraw review requests from users and teams.
    ///
    /// Same payload rules as [`PullRequest::add_reviewers`].
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn remove_reviewers<S: AsRef<str>, T: AsRef<str>>(
        &self,
        reviewers: &[S],
        team_reviewers: &[T],
    ) -> Result<&Self> {
        let payload = reviewers_payload(reviewers, team_reviewers);
        self.client
            .delete(&self.pulls_path("/requested_reviewers"), Some(&payload))
            .await?;
        Ok(self)
    }
}

fn reviewers_payload<S: AsRef<str>, T: AsRef<str>>(reviewers: &[S], team_reviewers: &[T]) -> Value {
    let mut payload = Map::new();
    if !reviewers.is_empty() {
        let names: Vec<&str> = reviewers.iter().map(AsRef::as_ref).collect();
        payload.insert("reviewers".into(), json!(names));
    }
    if !team_reviewers.is_empty() {
        let names: Vec<&str> = team_reviewers.iter().map(AsRef::as_ref).collect();
        payload.insert("team_reviewers".into(), json!(names));
    }
    Value::Object(payload)
}

impl<C> Deref for PullRequest<'_, C> {
    type Target = models::PullRequest;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<C> std::fmt::Debug for PullRequest<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PullRequest")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::{FakeConnector, Request, check_run_json, pull_request_json, user_json};
    use crate::types::MergeMethod;

    const NONE: &[&str] = &[];

    fn resource(client: &FakeConnector) -> PullRequest<'_, FakeConnector> {
        let data = models::PullRequest::from_value(pull_request_json(7, "open")).unwrap();
        PullRequest::new(client, "acme", "widgets", data)
    }

    #[tokio::test]
    async fn test_fields_read_through() {
        let client = FakeConnector::new();
        let pr = resource(&client);

        assert_eq!(pr.number, 7);
        assert_eq!(pr.title, "Change #7");
        assert!(pr.is_open());
        assert_eq!(pr.to_value(), pull_request_json(7, "open"));
        assert!(client.requests().is_empty());
    }

    #[tokio::test]
    async fn test_approve_with_and_without_body() {
        let client = FakeConnector::new();
        let pr = resource(&client);

        pr.approve(None).await.unwrap().approve(Some("LGTM")).await.unwrap();

        assert_eq!(
            client.requests(),
            vec![
                Request::new(
                    "POST",
                    "/repos/acme/widgets/pulls/7/reviews",
                    Some(json!({"event": "APPROVE"}))
                ),
                Request::new(
                    "POST",
                    "/repos/acme/widgets/pulls/7/reviews",
                    Some(json!({"event": "APPROVE", "body": "LGTM"}))
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_request_changes() {
        let client = FakeConnector::new();
        resource(&client).request_changes("Please add tests").await.unwrap();

        assert_eq!(
            client.requests()[0].body,
            Some(json!({"event": "REQUEST_CHANGES", "body": "Please add tests"}))
        );
    }

    #[tokio::test]
    async fn test_line_comment_needs_line_and_path() {
        let client = FakeConnector::new();
        let pr = resource(&client);

        pr.comment("lgtm", Some(42), Some("src/a.go")).await.unwrap();
        pr.comment("lgtm", None, None).await.unwrap();
        pr.comment("lgtm", Some(42), None).await.unwrap();
        pr.comment("lgtm", None, Some("src/a.go")).await.unwrap();

        let requests = client.requests();
        assert_eq!(
            requests[0],
            Request::new(
                "POST",
                "/repos/acme/widgets/pulls/7/comments",
                Some(json!({"body": "lgtm", "path": "src/a.go", "line": 42}))
            )
        );
        for request in &requests[1..] {
            assert_eq!(
                *request,
                Request::new(
                    "POST",
                    "/repos/acme/widgets/issues/7/comments",
                    Some(json!({"body": "lgtm"}))
                )
            );
        }
    }

    #[tokio::test]
    async fn test_merge_defaults_to_merge_commit() {
        let client = FakeConnector::new();
        let pr = resource(&client);

        pr.merge(&MergePullRequest::default()).await.unwrap();
        pr.merge(&MergePullRequest::new(MergeMethod::Squash).title("Ship"))
            .await
            .unwrap();

        let requests = client.requests();
        assert_eq!(requests[0].method, "PUT");
        assert_eq!(requests[0].path, "/repos/acme/widgets/pulls/7/merge");
        assert_eq!(requests[0].body, Some(json!({"merge_method": "merge"})));
        assert_eq!(
            requests[1].body,
            Some(json!({"merge_method": "squash", "commit_title": "Ship"}))
        );
    }

    #[tokio::test]
    async fn test_merge_rejection_propagates() {
        let client = FakeConnector::new().fail(prs_github::Error::ApiError {
            status: 405,
            message: "Pull Request is not mergeable".into(),
        });
        let err = resource(&client)
            .merge(&MergePullRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Remote(prs_github::Error::ApiError { status: 405, .. })
        ));
    }

    #[tokio::test]
    async fn test_close_reopen_and_update() {
        let client = FakeConnector::new();
        let pr = resource(&client);

        pr.close().await.unwrap().reopen().await.unwrap();
        pr.update(&json!({"title": "New title", "base": "develop"}))
            .await
            .unwrap();

        let bodies: Vec<_> = client
            .requests()
            .into_iter()
            .map(|r| {
                assert_eq!(r.method, "PATCH");
                assert_eq!(r.path, "/repos/acme/widgets/pulls/7");
                r.body.unwrap()
            })
            .collect();
        assert_eq!(
            bodies,
            vec![
                json!({"state": "closed"}),
                json!({"state": "open"}),
                json!({"title": "New title", "base": "develop"}),
            ]
        );
    }

    #[tokio::test]
    async fn test_mutation_does_not_refresh_snapshot() {
        let client = FakeConnector::new().respond(pull_request_json(7, "closed"));
        let pr = resource(&client);

        pr.close().await.unwrap();
        assert!(pr.is_open());

        let client = FakeConnector::new().respond(pull_request_json(7, "closed"));
        let fresh = resource(&client).refresh().await.unwrap();
        assert!(fresh.is_closed());
    }

    #[tokio::test]
    async fn test_reviews_are_decoded() {
        let client = FakeConnector::new().respond(json!([{
            "id": 80,
            "user": user_json(2, "hubot"),
            "body": null,
            "state": "APPROVED",
            "html_url": "https://github.com/acme/widgets/pull/7#pullrequestreview-80",
            "submitted_at": "2024-01-16T09:00:00Z"
        }]));
        let reviews = resource(&client).reviews().await.unwrap();

        assert_eq!(reviews.len(), 1);
        assert!(reviews[0].is_approved());
        assert_eq!(client.requests()[0].path, "/repos/acme/widgets/pulls/7/reviews");
    }

    #[tokio::test]
    async fn test_malformed_list_is_reported() {
        let client = FakeConnector::new().respond(json!([{"id": 80}]));
        let err = resource(&client).comments().await.unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { resource: "comment", .. }));
    }

    #[tokio::test]
    async fn test_checks_unwraps_envelope() {
        let client = FakeConnector::new().respond(json!({
            "total_count": 1,
            "check_runs": [check_run_json("build", "completed", Some("failure"))]
        }));
        let checks = resource(&client).checks().await.unwrap();

        assert_eq!(
            client.requests()[0].path,
            "/repos/acme/widgets/commits/abc123/check-runs"
        );
        assert_eq!(checks.len(), 1);
        assert!(checks[0].is_failed());
    }

    #[tokio::test]
    async fn test_checks_without_envelope_key_is_empty() {
        let client = FakeConnector::new().respond(json!({"total_count": 0}));
        assert!(resource(&client).checks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_files_are_decoded() {
        let client = FakeConnector::new().respond(json!([{
            "sha": "bbcd538c8e72b8c175046e27cc8f907076331401",
            "filename": "src/lib.rs",
            "status": "modified",
            "additions": 10,
            "deletions": 2,
            "changes": 12,
            "patch": "@@ -1 +1 @@"
        }]));
        let files = resource(&client).files().await.unwrap();

        assert_eq!(files[0].filename, "src/lib.rs");
        assert_eq!(files[0].changes, 12);
    }

    #[tokio::test]
    async fn test_labels_use_issues_namespace() {
        let client = FakeConnector::new();
        let pr = resource(&client);

        pr.add_labels(&["bug", "ui"]).await.unwrap();
        pr.remove_label("needs review").await.unwrap();

        assert_eq!(
            client.requests(),
            vec![
                Request::new(
                    "POST",
                    "/repos/acme/widgets/issues/7/labels",
                    Some(json!({"labels": ["bug", "ui"]}))
                ),
                Request::new(
                    "DELETE",
                    "/repos/acme/widgets/issues/7/labels/needs%20review",
                    None
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_reviewers_payload_skips_empty_lists() {
        let client = FakeConnector::new();
        let pr = resource(&client);

        pr.add_reviewers(&["alice"], &["core"]).await.unwrap();
        pr.add_reviewers(NONE, &["core"]).await.unwrap();
        pr.add_reviewers(NONE, NONE).await.unwrap();
        pr.remove_reviewers(&["alice"], NONE).await.unwrap();

        let requests = client.requests();
        assert_eq!(requests.len(), 4);
        assert_eq!(
            requests[0].body,
            Some(json!({"reviewers": ["alice"], "team_reviewers": ["core"]}))
        );
        assert_eq!(requests[1].body, Some(json!({"team_reviewers": ["core"]})));
        assert_eq!(requests[2].method, "POST");
        assert_eq!(
            requests[2].path,
            "/repos/acme/widgets/pulls/7/requested_reviewers"
        );
        assert_eq!(requests[2].body, Some(json!({})));
        assert_eq!(requests[3].method, "DELETE");
        assert_eq!(requests[3].body, Some(json!({"reviewers": ["alice"]})));
    }
}
