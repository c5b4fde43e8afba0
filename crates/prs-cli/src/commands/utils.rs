//! Shared helpers for commands.

use anyhow::{Context, Result};
use prs_core::split_repository;
use prs_github::{Auth, GitHubClient};
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::remote;

/// Resolved repository plus the settings a command needs to reach it.
#[derive(Debug)]
pub struct Session {
    pub owner: String,
    pub repo: String,
    pub json: bool,
    config: Config,
}

impl Session {
    /// Load the config and resolve the target repository.
    ///
    /// # Errors
    /// Returns error if the config is invalid or no repository can be
    /// determined.
    pub fn open(repo_flag: Option<&str>, json: bool) -> Result<Self> {
        let config = Config::load()?;
        let (owner, repo) = resolve_repository(repo_flag, &config)?;
        Ok(Self {
            owner,
            repo,
            json,
            config,
        })
    }

    /// Authenticated client for the configured API root.
    ///
    /// # Errors
    /// Returns error if no token is available.
    pub fn client(&self) -> Result<GitHubClient> {
        let auth = Auth::auto();
        let client = match &self.config.api_url {
            Some(url) => GitHubClient::with_base_url(&auth, url),
            None => GitHubClient::new(&auth),
        };
        client.context("Failed to create GitHub client")
    }

    /// `owner/name`.
    #[must_use]
    pub fn repository(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Pick the repository: `--repo`, then `default_repository`, then the
/// `origin` remote.
///
/// # Errors
/// Returns error if the chosen source is not a valid `owner/name`.
pub fn resolve_repository(repo_flag: Option<&str>, config: &Config) -> Result<(String, String)> {
    if let Some(repository) = repo_flag {
        return split_repository(repository).context("--repo must be owner/name");
    }

    if let Some(repository) = &config.default_repository {
        return split_repository(repository)
            .context("default_repository in config must be owner/name");
    }

    let url = remote::origin_url()
        .context("No repository given; pass --repo owner/name or set default_repository")?;
    remote::parse_github_remote(&url)
}

/// Runtime for a single command.
///
/// # Errors
/// Returns error if the runtime cannot be created.
pub fn runtime() -> Result<Runtime> {
    Runtime::new().context("Failed to start async runtime")
}
