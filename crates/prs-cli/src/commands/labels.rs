//! `prs label` and `prs reviewers` - manage labels and review requests.

use anyhow::{Context, Result, bail};
use prs_core::PullRequests;
use serde_json::json;

use super::utils::{self, Session};
use crate::output;

/// Run `label add`.
pub fn add(session: &Session, number: u64, labels: &[String]) -> Result<()> {
    let client = session.client()?;
    let rt = utils::runtime()?;
    let current = rt.block_on(async {
        let pr = PullRequests::new(&client, &session.owner, &session.repo)
            .get(number)
            .await
            .with_context(|| format!("Failed to fetch PR #{number}"))?;
        pr.add_labels(labels).await.context("Failed to add labels")?;
        pr.refresh()
            .await
            .with_context(|| format!("Failed to fetch PR #{number}"))
    })?;

    let names: Vec<&str> = current.label_names().collect();
    if session.json {
        return output::json(&json!({ "number": number, "labels": names }));
    }

    output::success(&format!("Labeled PR #{number}: {}", labels.join(", ")));
    output::info(&format!("Labels now: {}", names.join(", ")));
    Ok(())
}

/// Run `label remove`.
pub fn remove(session: &Session, number: u64, label: &str) -> Result<()> {
    let client = session.client()?;
    let rt = utils::runtime()?;
    rt.block_on(async {
        let pr = PullRequests::new(&client, &session.owner, &session.repo)
            .get(number)
            .await
            .with_context(|| format!("Failed to fetch PR #{number}"))?;
        pr.remove_label(label)
            .await
            .with_context(|| format!("Failed to remove label '{label}'"))?;
        anyhow::Ok(())
    })?;

    if session.json {
        return output::json(&json!({ "number": number, "removed": label }));
    }

    output::success(&format!("Removed label '{label}' from PR #{number}"));
    Ok(())
}

/// Run `reviewers add` or `reviewers remove`.
pub fn reviewers(
    session: &Session,
    number: u64,
    users: &[String],
    teams: &[String],
    add: bool,
) -> Result<()> {
    if users.is_empty() && teams.is_empty() {
        bail!("Pass at least one --user or --team");
    }

    let client = session.client()?;
    let rt = utils::runtime()?;
    rt.block_on(async {
        let pr = PullRequests::new(&client, &session.owner, &session.repo)
            .get(number)
            .await
            .with_context(|| format!("Failed to fetch PR #{number}"))?;
        if add {
            pr.add_reviewers(users, teams)
                .await
                .context("Failed to request reviews")?;
        } else {
            pr.remove_reviewers(users, teams)
                .await
                .context("Failed to withdraw review requests")?;
        }
        anyhow::Ok(())
    })?;

    if session.json {
        return output::json(&json!({
            "number": number,
            "action": if add { "requested" } else { "removed" },
            "reviewers": users,
            "team_reviewers": teams,
        }));
    }

    let who: Vec<String> = users
        .iter()
        .map(|user| format!("@{user}"))
        .chain(teams.iter().map(|team| format!("team {team}")))
        .collect();
    let verb = if add {
        "Requested review"
    } else {
        "Withdrew review request"
    };
    output::success(&format!("{verb} on PR #{number} from {}", who.join(", ")));
    Ok(())
}
