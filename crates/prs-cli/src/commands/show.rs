//! `prs show`, `checks`, `reviews`, `files` and `comments` - read-only views
//! of one pull request.

use anyhow::{Context, Result};
use colored::Colorize;
use prs_core::PullRequests;
use prs_core::models::{Comment, Dto};
use serde_json::{Value, json};

use super::utils::{self, Session};
use crate::output;

/// Run the show command.
pub fn run(session: &Session, number: u64) -> Result<()> {
    let client = session.client()?;
    let rt = utils::runtime()?;
    let pr = rt.block_on(async {
        PullRequests::new(&client, &session.owner, &session.repo)
            .get(number)
            .await
            .with_context(|| format!("Failed to fetch PR #{number}"))
    })?;

    if session.json {
        return output::json(&pr.to_value());
    }

    output::essential(&format!(
        "{} {} {}",
        pr.title.bold(),
        output::pr_ref(pr.number),
        output::state_label(&pr)
    ));
    output::hr();
    output::info(&format!(
        "@{} wants to merge {} into {}",
        pr.user.login, pr.head.ref_name, pr.base.ref_name
    ));
    output::info(&format!("Opened {}", pr.created_at.format("%Y-%m-%d %H:%M")));
    if let Some(merged_at) = pr.merged_at {
        output::info(&format!("Merged {}", merged_at.format("%Y-%m-%d %H:%M")));
    } else if let Some(closed_at) = pr.closed_at {
        output::info(&format!("Closed {}", closed_at.format("%Y-%m-%d %H:%M")));
    }

    let labels: Vec<&str> = pr.label_names().collect();
    if !labels.is_empty() {
        output::info(&format!("Labels: {}", labels.join(", ")));
    }
    if !pr.requested_reviewers.is_empty() {
        let reviewers: Vec<&str> = pr
            .requested_reviewers
            .iter()
            .map(|user| user.login.as_str())
            .collect();
        output::info(&format!("Review requested from: {}", reviewers.join(", ")));
    }

    if let Some(body) = pr.body.as_deref().filter(|body| !body.trim().is_empty()) {
        output::hr();
        output::essential(body.trim_end());
    }
    output::hr();
    output::essential(&pr.html_url);

    Ok(())
}

/// Run the checks command.
pub fn checks(session: &Session, number: u64) -> Result<()> {
    let client = session.client()?;
    let rt = utils::runtime()?;
    let checks = rt.block_on(async {
        let pr = PullRequests::new(&client, &session.owner, &session.repo)
            .get(number)
            .await
            .with_context(|| format!("Failed to fetch PR #{number}"))?;
        pr.checks().await.context("Failed to fetch check runs")
    })?;

    if session.json {
        return output::json(&to_values(&checks));
    }

    if checks.is_empty() {
        output::info(&format!("No check runs on PR #{number}"));
        return Ok(());
    }

    for check in &checks {
        let outcome = check
            .conclusion
            .as_ref()
            .map_or_else(|| check.status.as_str(), |conclusion| conclusion.as_str());
        output::essential(&format!(
            "{} {}  {}",
            output::check_indicator(check),
            check.name,
            outcome.dimmed()
        ));
    }

    let failed = checks.iter().filter(|check| check.is_failed()).count();
    let pending = checks.iter().filter(|check| !check.is_completed()).count();
    if failed > 0 {
        output::warn(&format!("{failed} of {} checks failed", checks.len()));
    } else if pending > 0 {
        output::info(&format!("{pending} of {} checks still running", checks.len()));
    } else {
        output::success(&format!("All {} checks passed", checks.len()));
    }

    Ok(())
}

/// Run the reviews command.
pub fn reviews(session: &Session, number: u64) -> Result<()> {
    let client = session.client()?;
    let rt = utils::runtime()?;
    let reviews = rt.block_on(async {
        let pr = PullRequests::new(&client, &session.owner, &session.repo)
            .get(number)
            .await
            .with_context(|| format!("Failed to fetch PR #{number}"))?;
        pr.reviews().await.context("Failed to fetch reviews")
    })?;

    if session.json {
        return output::json(&to_values(&reviews));
    }

    if reviews.is_empty() {
        output::info(&format!("No reviews on PR #{number}"));
        return Ok(());
    }

    for review in &reviews {
        output::essential(&format!(
            "{}  {}  {}",
            format!("@{}", review.user.login).bold(),
            output::review_state(review),
            review.submitted_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
        ));
        if let Some(body) = review.body.as_deref().filter(|body| !body.is_empty()) {
            output::essential(&format!("    {}", body.trim_end()));
        }
    }

    Ok(())
}

/// Run the files command.
pub fn files(session: &Session, number: u64) -> Result<()> {
    let client = session.client()?;
    let rt = utils::runtime()?;
    let files = rt.block_on(async {
        let pr = PullRequests::new(&client, &session.owner, &session.repo)
            .get(number)
            .await
            .with_context(|| format!("Failed to fetch PR #{number}"))?;
        pr.files().await.context("Failed to fetch changed files")
    })?;

    if session.json {
        return output::json(&to_values(&files));
    }

    for file in &files {
        let name = file.previous_filename.as_ref().map_or_else(
            || file.filename.clone(),
            |previous| format!("{previous} → {}", file.filename),
        );
        output::essential(&format!(
            "{} {}  {} {}",
            file.status.as_str().dimmed(),
            name,
            format!("+{}", file.additions).green(),
            format!("-{}", file.deletions).red()
        ));
    }

    let additions: u64 = files.iter().map(|file| file.additions).sum();
    let deletions: u64 = files.iter().map(|file| file.deletions).sum();
    output::info(&format!(
        "{} files changed, {additions} insertions, {deletions} deletions",
        files.len()
    ));

    Ok(())
}

/// Run the comments command.
pub fn comments(session: &Session, number: u64) -> Result<()> {
    let client = session.client()?;
    let rt = utils::runtime()?;
    let (thread, diff) = rt.block_on(async {
        let pr = PullRequests::new(&client, &session.owner, &session.repo)
            .get(number)
            .await
            .with_context(|| format!("Failed to fetch PR #{number}"))?;
        let thread = pr.comment_thread().await.context("Failed to fetch comments")?;
        let diff = pr.comments().await.context("Failed to fetch review comments")?;
        anyhow::Ok((thread, diff))
    })?;

    if session.json {
        return output::json(&json!({
            "conversation": to_values(&thread),
            "review": to_values(&diff),
        }));
    }

    if thread.is_empty() && diff.is_empty() {
        output::info(&format!("No comments on PR #{number}"));
        return Ok(());
    }

    for comment in thread.iter().chain(&diff) {
        print_comment(comment);
    }

    Ok(())
}

fn to_values<T: Dto>(items: &[T]) -> Vec<Value> {
    items.iter().map(Dto::to_value).collect()
}

fn print_comment(comment: &Comment) {
    output::essential(&format!(
        "{}  {}",
        format!("@{}", comment.user.login).bold(),
        comment.created_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
    ));
    for line in comment.body.lines() {
        output::essential(&format!("    {line}"));
    }
}
