//! Verb-based transport abstraction.
//!
//! Everything above the transport talks to GitHub through [`Connector`],
//! which lets callers inject the real client or an in-memory fake.

use std::future::Future;

use serde_json::Value;

use crate::error::Result;

/// Issues authenticated requests against the GitHub REST API.
///
/// Paths are relative endpoints such as `/repos/{owner}/{repo}/pulls` and
/// may already carry an encoded query string. Responses are returned as raw
/// JSON; an empty body is [`Value::Null`].
pub trait Connector: Send + Sync {
    /// Send a GET request.
    fn get(&self, path: &str) -> impl Future<Output = Result<Value>> + Send;

    /// Send a POST request with a JSON body.
    fn post(&self, path: &str, body: &Value) -> impl Future<Output = Result<Value>> + Send;

    /// Send a PATCH request with a JSON body.
    fn patch(&self, path: &str, body: &Value) -> impl Future<Output = Result<Value>> + Send;

    /// Send a PUT request with a JSON body.
    fn put(&self, path: &str, body: &Value) -> impl Future<Output = Result<Value>> + Send;

    /// Send a DELETE request, optionally with a JSON body.
    fn delete(
        &self,
        path: &str,
        body: Option<&Value>,
    ) -> impl Future<Output = Result<Value>> + Send;
}
