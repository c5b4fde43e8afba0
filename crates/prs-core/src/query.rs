//! Fluent pull request queries.
//!
//! A [`QueryBuilder`] accumulates filters, ordering and paging and sends
//! nothing until a terminal call: [`QueryBuilder::get`],
//! [`QueryBuilder::first`] or [`QueryBuilder::count`]. Each terminal call
//! issues exactly one list request and returns one page.
//!
//! ```no_run
//! # async fn demo(client: &prs_github::GitHubClient) -> prs_core::Result<()> {
//! use prs_core::QueryBuilder;
//!
//! let prs = QueryBuilder::new(client)
//!     .repository("acme/widgets")?
//!     .closed()
//!     .author("octocat")
//!     .take(5)
//!     .page(2)
//!     .get()
//!     .await?;
//! # Ok(())
//! # }
//! ```

use prs_github::{Connector, QueryParams, with_query};

use crate::error::{Error, Result};
use crate::models::{self, Dto};
use crate::resource::PullRequest;
use crate::split_repository;

/// Deferred, chainable list query.
pub struct QueryBuilder<'a, C> {
    client: &'a C,
    owner: Option<String>,
    repo: Option<String>,
    filters: QueryParams,
    sort: String,
    direction: String,
    limit: Option<u32>,
    page: u32,
}

impl<'a, C: Connector> QueryBuilder<'a, C> {
    /// Page size used when [`QueryBuilder::take`] was never called.
    pub const DEFAULT_PER_PAGE: u32 = 30;

    /// Start an empty query. A repository must be set before executing it.
    pub fn new(client: &'a C) -> Self {
        Self {
            client,
            owner: None,
            repo: None,
            filters: QueryParams::new(),
            sort: "created".to_string(),
            direction: "desc".to_string(),
            limit: None,
            page: 1,
        }
    }

    /// Start a query already targeting `owner/repo`.
    pub fn for_repository(
        client: &'a C,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        let mut query = Self::new(client);
        query.owner = Some(owner.into());
        query.repo = Some(repo.into());
        query
    }

    /// Target repository as `owner/name`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRepository`] if `repository` has no `/` or an
    /// empty owner or name.
    pub fn repository(mut self, repository: &str) -> Result<Self> {
        let (owner, repo) = split_repository(repository)?;
        self.owner = Some(owner);
        self.repo = Some(repo);
        Ok(self)
    }

    /// Filter by state: `open`, `closed` or `all`.
    #[must_use]
    pub fn state(self, state: impl Into<String>) -> Self {
        self.filter("state", state.into())
    }

    /// Only open pull requests.
    #[must_use]
    pub fn open(self) -> Self {
        self.state("open")
    }

    /// Only closed pull requests.
    #[must_use]
    pub fn closed(self) -> Self {
        self.state("closed")
    }

    /// Open and closed pull requests.
    #[must_use]
    pub fn all(self) -> Self {
        self.state("all")
    }

    /// Only pull requests opened by `login`.
    #[must_use]
    pub fn author(self, login: impl Into<String>) -> Self {
        self.filter("creator", login.into())
    }

    /// Only pull requests carrying `label`.
    #[must_use]
    pub fn label(self, label: impl Into<String>) -> Self {
        self.filter("labels", label.into())
    }

    /// Set any other list parameter, e.g. `head` or `base`.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.filters.set(key, value);
        self
    }

    /// Sort field and direction, replacing both.
    #[must_use]
    pub fn order_by(mut self, sort: impl Into<String>, direction: impl Into<String>) -> Self {
        self.sort = sort.into();
        self.direction = direction.into();
        self
    }

    /// Page size.
    #[must_use]
    pub fn take(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Page number, starting at 1.
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    fn target(&self) -> Result<(&str, &str)> {
        match (&self.owner, &self.repo) {
            (Some(owner), Some(repo)) => Ok((owner, repo)),
            _ => Err(Error::Configuration(
                "repository is required; call repository(\"owner/name\") first".into(),
            )),
        }
    }

    /// The list request this query would send.
    ///
    /// # Errors
    /// Returns [`Error::Configuration`] if no repository was set.
    pub fn request_path(&self) -> Result<String> {
        let (owner, repo) = self.target()?;

        let mut params = self.filters.clone();
        params.set("sort", &self.sort);
        params.set("direction", &self.direction);
        params.set("per_page", self.limit.unwrap_or(Self::DEFAULT_PER_PAGE));
        params.set("page", self.page);
        if !params.contains("state") {
            params.set("state", "open");
        }

        Ok(with_query(&format!("/repos/{owner}/{repo}/pulls"), &params))
    }

    /// Execute the query and return one page of results.
    ///
    /// # Errors
    /// Returns [`Error::Configuration`] without sending anything if no
    /// repository was set; otherwise any transport or decode error.
    pub async fn get(&self) -> Result<Vec<PullRequest<'a, C>>> {
        let path = self.request_path()?;
        let (owner, repo) = self.target()?;

        tracing::debug!(%path, "listing pull requests");
        let response = self.client.get(&path).await?;

        Ok(models::PullRequest::from_value_list(response)?
            .into_iter()
            .map(|data| PullRequest::new(self.client, owner, repo, data))
            .collect())
    }

    /// Fetch only the first match.
    ///
    /// Sets the page size to 1 on this builder before fetching, so the
    /// builder keeps that page size afterwards.
    ///
    /// # Errors
    /// Same as [`QueryBuilder::get`].
    pub async fn first(&mut self) -> Result<Option<PullRequest<'a, C>>> {
        self.limit = Some(1);
        Ok(self.get().await?.into_iter().next())
    }

    /// Number of results on the requested page.
    ///
    /// This fetches the page; there is no count endpoint.
    ///
    /// # Errors
    /// Same as [`QueryBuilder::get`].
    pub async fn count(&self) -> Result<usize> {
        Ok(self.get().await?.len())
    }
}

impl<C> std::fmt::Debug for QueryBuilder<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryBuilder")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("filters", &self.filters)
            .field("sort", &self.sort)
            .field("direction", &self.direction)
            .field("limit", &self.limit)
            .field("page", &self.page)
            .finish_non_exhaustive()
    }
}
