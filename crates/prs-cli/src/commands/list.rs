//! `prs list` command - List pull requests of the repository.

use anyhow::{Context, Result};
use prs_core::QueryBuilder;

use super::utils::{self, Session};
use crate::output;

/// Options for `prs list`.
#[derive(Debug)]
pub struct ListOptions<'a> {
    pub state: &'a str,
    pub author: Option<&'a str>,
    pub label: Option<&'a str>,
    pub sort: &'a str,
    pub direction: &'a str,
    pub limit: Option<u32>,
    pub page: u32,
}

/// Run the list command.
pub fn run(session: &Session, options: &ListOptions<'_>) -> Result<()> {
    let client = session.client()?;
    let rt = utils::runtime()?;

    let prs = rt.block_on(async {
        let mut query = QueryBuilder::for_repository(&client, &session.owner, &session.repo)
            .state(options.state)
            .order_by(options.sort, options.direction)
            .page(options.page);
        if let Some(author) = options.author {
            query = query.author(author);
        }
        if let Some(label) = options.label {
            query = query.label(label);
        }
        if let Some(limit) = options.limit {
            query = query.take(limit);
        }

        query.get().await.context("Failed to list pull requests")
    })?;

    if session.json {
        let values: Vec<_> = prs.iter().map(|pr| pr.to_value()).collect();
        return output::json(&values);
    }

    if prs.is_empty() {
        output::info(&format!("No {} pull requests in {}", options.state, session.repository()));
        return Ok(());
    }

    for pr in &prs {
        output::essential(&output::pr_line(pr));
    }

    Ok(())
}
