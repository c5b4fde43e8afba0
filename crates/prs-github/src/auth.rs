//! Token resolution for GitHub authentication.

use std::process::Command;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{Error, Result};

/// Source of a GitHub API token.
#[derive(Debug, Clone)]
pub enum Auth {
    /// Ask the `gh` CLI for its stored token.
    GhCli,

    /// Read the token from the named environment variable.
    EnvVar(String),

    /// Use the given token directly.
    Token(SecretString),
}

impl Auth {
    /// Environment variable consulted by [`Auth::auto`].
    pub const DEFAULT_ENV_VAR: &'static str = "GITHUB_TOKEN";

    /// Pick a token source automatically.
    ///
    /// Prefers `GITHUB_TOKEN` when it is set and non-empty, otherwise
    /// falls back to the `gh` CLI.
    #[must_use]
    pub fn auto() -> Self {
        match std::env::var(Self::DEFAULT_ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => Self::EnvVar(Self::DEFAULT_ENV_VAR.into()),
            _ => Self::GhCli,
        }
    }

    /// Resolve the token.
    ///
    /// # Errors
    /// Returns [`Error::NoToken`] if the source yields nothing, or
    /// [`Error::Io`] if the `gh` CLI cannot be executed.
    pub fn resolve(&self) -> Result<SecretString> {
        match self {
            Self::Token(token) => non_empty(token.expose_secret()),
            Self::EnvVar(name) => std::env::var(name)
                .map_err(|_| Error::NoToken)
                .and_then(|value| non_empty(&value)),
            Self::GhCli => {
                let output = Command::new("gh").args(["auth", "token"]).output()?;
                if !output.status.success() {
                    return Err(Error::NoToken);
                }
                non_empty(&String::from_utf8_lossy(&output.stdout))
            }
        }
    }
}

fn non_empty(value: &str) -> Result<SecretString> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::NoToken)
    } else {
        Ok(SecretString::from(trimmed.to_string()))
    }
}
