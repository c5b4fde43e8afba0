//! `prs approve`, `request-changes` and `comment` - submit feedback.

use anyhow::{Context, Result, bail};
use prs_core::PullRequests;
use serde_json::json;

use super::utils::{self, Session};
use crate::output;

/// Run the approve command.
pub fn approve(session: &Session, number: u64, body: Option<&str>) -> Result<()> {
    let client = session.client()?;
    let rt = utils::runtime()?;
    let url = rt.block_on(async {
        let pr = PullRequests::new(&client, &session.owner, &session.repo)
            .get(number)
            .await
            .with_context(|| format!("Failed to fetch PR #{number}"))?;
        pr.approve(body).await.context("Failed to approve PR")?;
        anyhow::Ok(pr.html_url.clone())
    })?;

    report(session, number, "approved", &url, &format!("Approved PR #{number}"))
}

/// Run the request-changes command.
pub fn request_changes(session: &Session, number: u64, body: &str) -> Result<()> {
    if body.trim().is_empty() {
        bail!("A review body is required when requesting changes");
    }

    let client = session.client()?;
    let rt = utils::runtime()?;
    let url = rt.block_on(async {
        let pr = PullRequests::new(&client, &session.owner, &session.repo)
            .get(number)
            .await
            .with_context(|| format!("Failed to fetch PR #{number}"))?;
        pr.request_changes(body)
            .await
            .context("Failed to request changes")?;
        anyhow::Ok(pr.html_url.clone())
    })?;

    report(
        session,
        number,
        "changes_requested",
        &url,
        &format!("Requested changes on PR #{number}"),
    )
}

/// Run the comment command.
pub fn comment(
    session: &Session,
    number: u64,
    body: &str,
    line: Option<u64>,
    path: Option<&str>,
) -> Result<()> {
    let client = session.client()?;
    let rt = utils::runtime()?;
    let url = rt.block_on(async {
        let pr = PullRequests::new(&client, &session.owner, &session.repo)
            .get(number)
            .await
            .with_context(|| format!("Failed to fetch PR #{number}"))?;
        pr.comment(body, line, path)
            .await
            .context("Failed to post comment")?;
        anyhow::Ok(pr.html_url.clone())
    })?;

    let message = match (line, path) {
        (Some(line), Some(path)) => format!("Commented on {path}:{line} in PR #{number}"),
        _ => format!("Commented on PR #{number}"),
    };
    report(session, number, "commented", &url, &message)
}

fn report(session: &Session, number: u64, action: &str, url: &str, message: &str) -> Result<()> {
    if session.json {
        return output::json(&json!({
            "repository": session.repository(),
            "number": number,
            "action": action,
            "url": url,
        }));
    }

    output::success(message);
    output::essential(url);
    Ok(())
}
