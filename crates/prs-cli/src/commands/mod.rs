//! CLI command definitions and handlers.

use clap::{ArgAction, Parser, Subcommand};
use prs_core::MergeMethod;

pub mod completions;
pub mod labels;
pub mod list;
pub mod review;
pub mod show;
pub mod state;
pub mod utils;

/// prs - GitHub pull requests from the terminal.
///
/// List, inspect, review and merge pull requests of a repository. The
/// repository comes from `--repo`, the config file, or the `origin`
/// remote of the current git checkout.
#[derive(Parser)]
#[command(name = "prs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Repository as `owner/name`.
    #[arg(long, short = 'R', global = true)]
    pub repo: Option<String>,

    /// Output as JSON (for tooling integration).
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress informational output.
    ///
    /// Only errors and essential results (like PR URLs) are printed.
    /// Exit code 0 indicates success.
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Log library activity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List pull requests.
    ///
    /// Defaults to open pull requests, newest first, 30 per page.
    #[command(alias = "ls")]
    List {
        /// State filter: open, closed or all.
        #[arg(long, short, default_value = "open")]
        state: String,

        /// Only pull requests opened by this user.
        #[arg(long, short)]
        author: Option<String>,

        /// Only pull requests carrying this label.
        #[arg(long, short)]
        label: Option<String>,

        /// Sort field: created, updated, popularity or long-running.
        #[arg(long, default_value = "created")]
        sort: String,

        /// Sort direction: asc or desc.
        #[arg(long, default_value = "desc")]
        direction: String,

        /// Page size.
        #[arg(long, short = 'n')]
        limit: Option<u32>,

        /// Page number, starting at 1.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Show one pull request.
    #[command(alias = "s")]
    Show {
        /// Pull request number.
        number: u64,
    },

    /// Show check runs on the head commit.
    #[command(alias = "ci")]
    Checks {
        /// Pull request number.
        number: u64,
    },

    /// Show submitted reviews.
    Reviews {
        /// Pull request number.
        number: u64,
    },

    /// Show changed files.
    Files {
        /// Pull request number.
        number: u64,
    },

    /// Show conversation and diff comments.
    Comments {
        /// Pull request number.
        number: u64,
    },

    /// Approve a pull request.
    Approve {
        /// Pull request number.
        number: u64,

        /// Review body.
        #[arg(long, short)]
        body: Option<String>,
    },

    /// Request changes on a pull request.
    RequestChanges {
        /// Pull request number.
        number: u64,

        /// Review body explaining the requested changes.
        #[arg(long, short)]
        body: String,
    },

    /// Comment on a pull request.
    ///
    /// With both --line and --path the comment is attached to that line
    /// of the diff; otherwise it goes to the conversation.
    Comment {
        /// Pull request number.
        number: u64,

        /// Comment text.
        body: String,

        /// Diff line to attach the comment to.
        #[arg(long, requires = "path")]
        line: Option<u64>,

        /// File the line belongs to.
        #[arg(long, requires = "line")]
        path: Option<String>,
    },

    /// Merge a pull request.
    #[command(alias = "m")]
    Merge {
        /// Pull request number.
        number: u64,

        /// Merge method: merge (default), squash, or rebase.
        #[arg(long, short, default_value = "merge")]
        method: MergeMethod,

        /// Title of the merge commit.
        #[arg(long, short)]
        title: Option<String>,

        /// Message of the merge commit.
        #[arg(long)]
        message: Option<String>,
    },

    /// Close a pull request without merging.
    Close {
        /// Pull request number.
        number: u64,
    },

    /// Reopen a closed pull request.
    Reopen {
        /// Pull request number.
        number: u64,
    },

    /// Add or remove labels.
    Label {
        #[command(subcommand)]
        action: LabelAction,
    },

    /// Request or withdraw reviews.
    Reviewers {
        #[command(subcommand)]
        action: ReviewersAction,
    },

    /// Generate shell completions.
    ///
    /// Outputs completion script to stdout. Redirect to a file and
    /// source it in your shell configuration.
    #[command(alias = "comp")]
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// `prs label` subcommands.
#[derive(Subcommand)]
pub enum LabelAction {
    /// Add one or more labels.
    Add {
        /// Pull request number.
        number: u64,

        /// Label names.
        #[arg(required = true)]
        labels: Vec<String>,
    },

    /// Remove a label.
    #[command(alias = "rm")]
    Remove {
        /// Pull request number.
        number: u64,

        /// Label name.
        label: String,
    },
}

/// `prs reviewers` subcommands.
#[derive(Subcommand)]
pub enum ReviewersAction {
    /// Request reviews.
    Add {
        /// Pull request number.
        number: u64,

        /// User login (repeatable).
        #[arg(long = "user", short)]
        users: Vec<String>,

        /// Team slug (repeatable).
        #[arg(long = "team", short)]
        teams: Vec<String>,
    },

    /// Withdraw review requests.
    #[command(alias = "rm")]
    Remove {
        /// Pull request number.
        number: u64,

        /// User login (repeatable).
        #[arg(long = "user", short)]
        users: Vec<String>,

        /// Team slug (repeatable).
        #[arg(long = "team", short)]
        teams: Vec<String>,
    },
}
