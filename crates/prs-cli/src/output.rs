//! Terminal output formatting utilities.

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use colored::Colorize;
use prs_core::models::{CheckRun, PullRequest, Review, ReviewState};
use serde::Serialize;

static QUIET_MODE: AtomicBool = AtomicBool::new(false);

/// Set quiet mode globally. Call once at startup.
pub fn set_quiet(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::Relaxed)
}

/// Print a success message (suppressed in quiet mode).
pub fn success(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "✓".green(), msg);
    }
}

/// Print an error message (always prints to stderr).
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a warning message (always prints to stderr).
pub fn warn(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

/// Print an info message (suppressed in quiet mode).
pub fn info(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "→".blue(), msg);
    }
}

/// Print essential machine-readable output (always prints).
///
/// Use for results that should be available for piping, like PR URLs.
pub fn essential(msg: &str) {
    println!("{msg}");
}

/// Print `value` as pretty JSON (always prints).
pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    essential(&serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a horizontal line (suppressed in quiet mode).
pub fn hr() {
    if !is_quiet() {
        println!("{}", "─".repeat(50).dimmed());
    }
}

/// Format a PR reference.
#[must_use]
pub fn pr_ref(number: u64) -> String {
    format!("#{number}").dimmed().to_string()
}

/// Colored state label: merged, draft, open or closed.
#[must_use]
pub fn state_label(pr: &PullRequest) -> String {
    if pr.is_merged() {
        "merged".magenta().to_string()
    } else if pr.is_draft() && pr.is_open() {
        "draft".dimmed().to_string()
    } else if pr.is_open() {
        "open".green().to_string()
    } else {
        pr.state.as_str().red().to_string()
    }
}

/// One-line summary used by `list`.
#[must_use]
pub fn pr_line(pr: &PullRequest) -> String {
    let mut line = format!(
        "{:>6}  {}  {}  {}",
        pr_ref(pr.number),
        state_label(pr),
        pr.title,
        format!("@{}", pr.user.login).dimmed()
    );

    let labels: Vec<&str> = pr.label_names().collect();
    if !labels.is_empty() {
        line.push_str(&format!("  [{}]", labels.join(", ")).cyan().to_string());
    }
    line
}

/// Status indicator for a check run.
#[must_use]
pub fn check_indicator(check: &CheckRun) -> String {
    if !check.is_completed() {
        "●".yellow().to_string()
    } else if check.is_successful() {
        "●".green().to_string()
    } else if check.is_failed() {
        "●".red().to_string()
    } else {
        "○".dimmed().to_string()
    }
}

/// Colored review state.
#[must_use]
pub fn review_state(review: &Review) -> String {
    match &review.state {
        ReviewState::Approved => "approved".green().to_string(),
        ReviewState::ChangesRequested => "changes requested".red().to_string(),
        ReviewState::Commented => "commented".blue().to_string(),
        other => other.as_str().dimmed().to_string(),
    }
}
