//! prs CLI - GitHub pull requests from the terminal.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod logger;
mod output;
mod remote;

use commands::list::ListOptions;
use commands::utils::Session;
use commands::{Cli, Commands, LabelAction, ReviewersAction};

fn main() {
    let cli = Cli::parse();
    output::set_quiet(cli.quiet);

    if let Err(e) = logger::init(cli.verbose) {
        output::warn(&format!("Logging disabled: {e}"));
    }

    if let Err(e) = run(cli) {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Commands::Completions { shell } = cli.command {
        return commands::completions::run(shell);
    }

    let session = Session::open(cli.repo.as_deref(), cli.json)?;

    match cli.command {
        Commands::List {
            state,
            author,
            label,
            sort,
            direction,
            limit,
            page,
        } => commands::list::run(
            &session,
            &ListOptions {
                state: &state,
                author: author.as_deref(),
                label: label.as_deref(),
                sort: &sort,
                direction: &direction,
                limit,
                page,
            },
        ),
        Commands::Show { number } => commands::show::run(&session, number),
        Commands::Checks { number } => commands::show::checks(&session, number),
        Commands::Reviews { number } => commands::show::reviews(&session, number),
        Commands::Files { number } => commands::show::files(&session, number),
        Commands::Comments { number } => commands::show::comments(&session, number),
        Commands::Approve { number, body } => {
            commands::review::approve(&session, number, body.as_deref())
        }
        Commands::RequestChanges { number, body } => {
            commands::review::request_changes(&session, number, &body)
        }
        Commands::Comment {
            number,
            body,
            line,
            path,
        } => commands::review::comment(&session, number, &body, line, path.as_deref()),
        Commands::Merge {
            number,
            method,
            title,
            message,
        } => commands::state::merge(
            &session,
            number,
            method,
            title.as_deref(),
            message.as_deref(),
        ),
        Commands::Close { number } => commands::state::close(&session, number),
        Commands::Reopen { number } => commands::state::reopen(&session, number),
        Commands::Label { action } => match action {
            LabelAction::Add { number, labels } => {
                commands::labels::add(&session, number, &labels)
            }
            LabelAction::Remove { number, label } => {
                commands::labels::remove(&session, number, &label)
            }
        },
        Commands::Reviewers { action } => match action {
            ReviewersAction::Add {
                number,
                users,
                teams,
            } => commands::labels::reviewers(&session, number, &users, &teams, true),
            ReviewersAction::Remove {
                number,
                users,
                teams,
            } => commands::labels::reviewers(&session, number, &users, &teams, false),
        },
        Commands::Completions { .. } => Ok(()),
    }
}
