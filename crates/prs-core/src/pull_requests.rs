//! Repository-scoped pull request operations.

use prs_github::{Connector, QueryParams, with_query};
use serde::Serialize;
use serde_json::{Value, json};

use crate::error::{Error, Result};
use crate::models::{self, Dto};
use crate::query::QueryBuilder;
use crate::resource::PullRequest;
use crate::split_repository;
use crate::types::MergePullRequest;

/// Parameters for [`PullRequests::list`].
///
/// Applied over the defaults `state=open`, `sort=created`,
/// `direction=desc`; a key given here replaces the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    params: QueryParams,
}

impl Filters {
    /// No filters: the defaults apply unchanged.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `open`, `closed` or `all`.
    #[must_use]
    pub fn state(self, state: impl Into<String>) -> Self {
        self.set("state", state.into())
    }

    /// Only pull requests opened by `login`.
    #[must_use]
    pub fn author(self, login: impl Into<String>) -> Self {
        self.set("creator", login.into())
    }

    /// Only pull requests carrying `label`.
    #[must_use]
    pub fn label(self, label: impl Into<String>) -> Self {
        self.set("labels", label.into())
    }

    /// Sort field (`created`, `updated`, `popularity`, `long-running`).
    #[must_use]
    pub fn sort(self, sort: impl Into<String>) -> Self {
        self.set("sort", sort.into())
    }

    /// `asc` or `desc`.
    #[must_use]
    pub fn direction(self, direction: impl Into<String>) -> Self {
        self.set("direction", direction.into())
    }

    /// Page size.
    #[must_use]
    pub fn per_page(self, per_page: u32) -> Self {
        self.set("per_page", per_page)
    }

    /// Page number.
    #[must_use]
    pub fn page(self, page: u32) -> Self {
        self.set("page", page)
    }

    /// Any other list parameter.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.set(key, value);
        self
    }

    /// The filters as query parameters.
    #[must_use]
    pub const fn as_params(&self) -> &QueryParams {
        &self.params
    }
}

/// Entry point for the pull requests of one repository.
pub struct PullRequests<'a, C> {
    client: &'a C,
    owner: String,
    repo: String,
}

impl<'a, C: Connector> PullRequests<'a, C> {
    /// Bind to `owner/repo` on `client`.
    pub fn new(client: &'a C, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Bind to a repository given as `owner/name`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRepository`] if `repository` is not `owner/name`.
    pub fn for_repository(client: &'a C, repository: &str) -> Result<Self> {
        let (owner, repo) = split_repository(repository)?;
        Ok(Self::new(client, owner, repo))
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

    fn pulls_path(&self) -> String {
        format!("/repos/{}/{}/pulls", self.owner, self.repo)
    }

    fn wrap(&self, response: Value) -> Result<PullRequest<'a, C>> {
        Ok(PullRequest::new(
            self.client,
            self.owner.clone(),
            self.repo.clone(),
            models::PullRequest::from_value(response)?,
        ))
    }

    /// A query on this repository, initially limited to open pull requests.
    #[must_use]
    pub fn query(&self) -> QueryBuilder<'a, C> {
        QueryBuilder::for_repository(self.client, self.owner.clone(), self.repo.clone()).open()
    }

    /// Fetch one pull request.
    ///
    /// # Errors
    /// Returns error if the request fails or the response is malformed.
    pub async fn get(&self, number: u64) -> Result<PullRequest<'a, C>> {
        let response = self
            .client
            .get(&format!("{}/{number}", self.pulls_path()))
            .await?;
        self.wrap(response)
    }

    /// Alias of [`PullRequests::get`].
    ///
    /// # Errors
    /// Same as [`PullRequests::get`].
    pub async fn find(&self, number: u64) -> Result<PullRequest<'a, C>> {
        self.get(number).await
    }

    /// List one page of pull requests.
    ///
    /// # Errors
    /// Returns error if the request fails or the response is malformed.
    pub async fn list(&self, filters: &Filters) -> Result<Vec<PullRequest<'a, C>>> {
        let mut params = QueryParams::new()
            .with("state", "open")
            .with("sort", "created")
            .with("direction", "desc");
        params.extend_from(filters.as_params());

        let path = with_query(&self.pulls_path(), &params);
        tracing::debug!(%path, "listing pull requests");
        let response = self.client.get(&path).await?;

        Ok(models::PullRequest::from_value_list(response)?
            .into_iter()
            .map(|data| PullRequest::new(self.client, self.owner.clone(), self.repo.clone(), data))
            .collect())
    }

    /// Open pull requests.
    ///
    /// # Errors
    /// Same as [`PullRequests::list`].
    pub async fn open(&self) -> Result<Vec<PullRequest<'a, C>>> {
        self.list(&Filters::new().state("open")).await
    }

    /// Closed pull requests.
    ///
    /// # Errors
    /// Same as [`PullRequests::list`].
    pub async fn closed(&self) -> Result<Vec<PullRequest<'a, C>>> {
        self.list(&Filters::new().state("closed")).await
    }

    /// Open a new pull request. `attributes` is passed through unvalidated.
    ///
    /// # Errors
    /// Returns error if `attributes` cannot be encoded, the request fails,
    /// or the response is malformed.
    pub async fn create<A: Serialize + ?Sized>(
        &self,
        attributes: &A,
    ) -> Result<PullRequest<'a, C>> {
        let body = serde_json::to_value(attributes).map_err(Error::Encode)?;
        tracing::debug!(owner = %self.owner, repo = %self.repo, "creating pull request");
        let response = self.client.post(&self.pulls_path(), &body).await?;
        self.wrap(response)
    }

    /// Update a pull request. `attributes` is passed through unvalidated.
    ///
    /// # Errors
    /// Returns error if `attributes` cannot be encoded, the request fails,
    /// or the response is malformed.
    pub async fn update<A: Serialize + ?Sized>(
        &self,
        number: u64,
        attributes: &A,
    ) -> Result<PullRequest<'a, C>> {
        let body = serde_json::to_value(attributes).map_err(Error::Encode)?;
        tracing::debug!(owner = %self.owner, repo = %self.repo, number, "updating pull request");
        let response = self
            .client
            .patch(&format!("{}/{number}", self.pulls_path()), &body)
            .await?;
        self.wrap(response)
    }

    /// Merge a pull request and report whether GitHub merged it.
    ///
    /// A success response without `merged: true` yields `false`; only
    /// transport failures are errors.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn merge(&self, number: u64, request: &MergePullRequest) -> Result<bool> {
        let body = serde_json::to_value(request).map_err(Error::Encode)?;
        tracing::debug!(owner = %self.owner, repo = %self.repo, number, "merging pull request");
        let response = self
            .client
            .put(&format!("{}/{number}/merge", self.pulls_path()), &body)
            .await?;

        Ok(response
            .get("merged")
            .and_then(Value::as_bool)
            .unwrap_or(false))
    }

    /// Close a pull request without merging.
    ///
    /// # Errors
    /// Same as [`PullRequests::update`].
    pub async fn close(&self, number: u64) -> Result<PullRequest<'a, C>> {
        self.update(number, &json!({ "state": "closed" })).await
    }
}

impl<C> std::fmt::Debug for PullRequests<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PullRequests")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .finish_non_exhaustive()
    }
}
