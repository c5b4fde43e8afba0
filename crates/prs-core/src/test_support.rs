//! Fixtures and an in-memory connector for unit tests.

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::Mutex;

use prs_github::Connector;
use serde_json::{Value, json};

/// A request captured by [`FakeConnector`].
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

impl Request {
    pub fn new(method: &'static str, path: &str, body: Option<Value>) -> Self {
        Self {
            method,
            path: path.to_string(),
            body,
        }
    }
}

/// Connector that records every request and replays queued responses.
///
/// Once the queue is empty every request answers `null`.
#[derive(Default)]
pub struct FakeConnector {
    requests: Mutex<Vec<Request>>,
    responses: Mutex<VecDeque<prs_github::Result<Value>>>,
}

impl FakeConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn respond(self, value: Value) -> Self {
        self.responses.lock().unwrap().push_back(Ok(value));
        self
    }

    /// Queue a failure.
    pub fn fail(self, error: prs_github::Error) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Everything sent so far, in order.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    fn record(
        &self,
        method: &'static str,
        path: &str,
        body: Option<&Value>,
    ) -> prs_github::Result<Value> {
        self.requests
            .lock()
            .unwrap()
            .push(Request::new(method, path, body.cloned()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Value::Null))
    }
}

impl Connector for FakeConnector {
    async fn get(&self, path: &str) -> prs_github::Result<Value> {
        self.record("GET", path, None)
    }

    async fn post(&self, path: &str, body: &Value) -> prs_github::Result<Value> {
        self.record("POST", path, Some(body))
    }

    async fn patch(&self, path: &str, body: &Value) -> prs_github::Result<Value> {
        self.record("PATCH", path, Some(body))
    }

    async fn put(&self, path: &str, body: &Value) -> prs_github::Result<Value> {
        self.record("PUT", path, Some(body))
    }

    async fn delete(&self, path: &str, body: Option<&Value>) -> prs_github::Result<Value> {
        self.record("DELETE", path, body)
    }
}

pub fn user_json(id: u64, login: &str) -> Value {
    json!({
        "id": id,
        "login": login,
        "avatar_url": format!("https://avatars.githubusercontent.com/u/{id}"),
        "html_url": format!("https://github.com/{login}"),
        "type": "User"
    })
}

pub fn label_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "color": "ededed",
        "description": format!("{name} label")
    })
}

pub fn branch_json(ref_name: &str, sha: &str) -> Value {
    json!({
        "ref": ref_name,
        "sha": sha,
        "user": user_json(10, "acme"),
        "repo": {
            "id": 100,
            "name": "widgets",
            "full_name": "acme/widgets",
            "html_url": "https://github.com/acme/widgets",
            "private": false
        }
    })
}

pub fn check_run_json(name: &str, status: &str, conclusion: Option<&str>) -> Value {
    json!({
        "id": 55,
        "name": name,
        "status": status,
        "conclusion": conclusion,
        "html_url": "https://github.com/acme/widgets/runs/55",
        "started_at": "2024-01-15T10:30:00+00:00",
        "completed_at": conclusion.map(|_| "2024-01-15T10:35:00+00:00")
    })
}

/// A complete pull request in canonical form: every key present.
pub fn pull_request_json(number: u64, state: &str) -> Value {
    json!({
        "number": number,
        "title": format!("Change #{number}"),
        "body": "Some description",
        "state": state,
        "user": user_json(1, "octocat"),
        "html_url": format!("https://github.com/acme/widgets/pull/{number}"),
        "created_at": "2024-01-15T10:30:00+00:00",
        "updated_at": "2024-01-16T08:00:00+00:00",
        "closed_at": null,
        "merged_at": null,
        "merge_commit_sha": null,
        "draft": false,
        "assignee": null,
        "assignees": [],
        "requested_reviewers": [],
        "labels": [],
        "head": branch_json("feature/widgets", "abc123"),
        "base": branch_json("main", "def456")
    })
}
