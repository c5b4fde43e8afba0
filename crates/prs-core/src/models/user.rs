//! GitHub account model.

use serde::{Deserialize, Serialize};

use super::Dto;

/// A GitHub account: a person, an organization, or a bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Account ID.
    pub id: u64,

    /// Login name.
    pub login: String,

    /// Avatar image URL.
    pub avatar_url: String,

    /// Profile URL.
    pub html_url: String,

    /// Account type as reported by GitHub (`User`, `Bot`, `Organization`).
    #[serde(rename = "type")]
    pub kind: String,
}

impl User {
    /// Whether this is an automation identity (a GitHub App or bot).
    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.kind == "Bot"
    }
}

impl Dto for User {
    const RESOURCE: &'static str = "user";
}
