//! `prs merge`, `close` and `reopen` - change the state of a pull request.

use anyhow::{Context, Result, bail};
use prs_core::{MergeMethod, MergePullRequest, PullRequests};
use serde::Serialize;

use super::utils::{self, Session};
use crate::output;

/// JSON output for state changes.
#[derive(Debug, Serialize)]
struct StateOutput {
    repository: String,
    number: u64,
    state: String,
    merged: bool,
    url: String,
}

/// Run the merge command.
pub fn merge(
    session: &Session,
    number: u64,
    method: MergeMethod,
    title: Option<&str>,
    message: Option<&str>,
) -> Result<()> {
    let mut request = MergePullRequest::new(method);
    if let Some(title) = title {
        request = request.title(title);
    }
    if let Some(message) = message {
        request = request.message(message);
    }

    let client = session.client()?;
    let rt = utils::runtime()?;
    let (merged, pr) = rt.block_on(async {
        let prs = PullRequests::new(&client, &session.owner, &session.repo);
        let merged = prs
            .merge(number, &request)
            .await
            .with_context(|| format!("Failed to merge PR #{number}"))?;
        let pr = prs
            .get(number)
            .await
            .with_context(|| format!("Failed to fetch PR #{number}"))?;
        anyhow::Ok((merged, pr))
    })?;

    if session.json {
        return output::json(&StateOutput {
            repository: session.repository(),
            number,
            state: pr.state.to_string(),
            merged,
            url: pr.html_url.clone(),
        });
    }

    if !merged {
        bail!("GitHub did not merge PR #{number}");
    }

    output::success(&format!("Merged PR #{number} ({})", method.as_str()));
    if let Some(sha) = &pr.merge_commit_sha {
        output::info(&format!("Merge commit {sha}"));
    }
    Ok(())
}

/// Run the close command.
pub fn close(session: &Session, number: u64) -> Result<()> {
    set_open(session, number, false)
}

/// Run the reopen command.
pub fn reopen(session: &Session, number: u64) -> Result<()> {
    set_open(session, number, true)
}

fn set_open(session: &Session, number: u64, open: bool) -> Result<()> {
    let client = session.client()?;
    let rt = utils::runtime()?;
    let pr = rt.block_on(async {
        let pr = PullRequests::new(&client, &session.owner, &session.repo)
            .get(number)
            .await
            .with_context(|| format!("Failed to fetch PR #{number}"))?;

        if pr.is_merged() {
            bail!("PR #{number} is already merged");
        }
        if open {
            pr.reopen().await.context("Failed to reopen PR")?;
        } else {
            pr.close().await.context("Failed to close PR")?;
        }
        pr.refresh()
            .await
            .with_context(|| format!("Failed to fetch PR #{number}"))
    })?;

    if session.json {
        return output::json(&StateOutput {
            repository: session.repository(),
            number,
            state: pr.state.to_string(),
            merged: pr.is_merged(),
            url: pr.html_url.clone(),
        });
    }

    if open {
        output::success(&format!("Reopened PR #{number}"));
    } else {
        output::success(&format!("Closed PR #{number}"));
    }
    Ok(())
}
