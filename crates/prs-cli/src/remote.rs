//! Repository detection from the local git checkout.

use anyhow::{Context, Result, bail};
use git2::Repository;

/// URL of the `origin` remote of the repository containing the current
/// directory.
///
/// # Errors
/// Returns error if not inside a git repository or there is no `origin`.
pub fn origin_url() -> Result<String> {
    let repo = Repository::discover(".").context("Not inside a git repository")?;
    let remote = repo
        .find_remote("origin")
        .context("Remote 'origin' not found")?;

    remote
        .url()
        .map(String::from)
        .context("Remote 'origin' has no valid URL")
}

/// Parse owner and repo name from a GitHub URL.
///
/// Supports both HTTPS and SSH URLs:
/// - `https://github.com/owner/repo.git`
/// - `git@github.com:owner/repo.git`
/// - `ssh://git@github.com/owner/repo.git`
///
/// # Errors
/// Returns error if URL is not a GitHub repository URL.
pub fn parse_github_remote(url: &str) -> Result<(String, String)> {
    let rest = url
        .strip_prefix("git@github.com:")
        .or_else(|| url.strip_prefix("ssh://git@github.com/"))
        .or_else(|| url.strip_prefix("https://github.com/"))
        .or_else(|| url.strip_prefix("http://github.com/"));

    if let Some(rest) = rest {
        let path = rest.trim_end_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);
        if let Some((owner, repo)) = path.split_once('/') {
            if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') {
                return Ok((owner.to_string(), repo.to_string()));
            }
        }
    }

    bail!("Not a GitHub repository URL: {url}")
}
