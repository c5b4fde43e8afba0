//! GitHub API client.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::auth::Auth;
use crate::connector::Connector;
use crate::error::{Error, Result};

/// GitHub API client.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: SecretString,
}

impl GitHubClient {
    /// Default GitHub API URL.
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";

    /// Create a new GitHub client.
    ///
    /// # Errors
    /// Returns error if authentication fails.
    pub fn new(auth: &Auth) -> Result<Self> {
        Self::with_base_url(auth, Self::DEFAULT_API_URL)
    }

    /// Create a new GitHub client with a custom API URL (for GitHub Enterprise).
    ///
    /// # Errors
    /// Returns error if authentication fails.
    pub fn with_base_url(auth: &Auth, base_url: impl Into<String>) -> Result<Self> {
        let token = auth.resolve()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("prs-cli"));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    /// The API base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url).header(
            AUTHORIZATION,
            format!("Bearer {}", self.token.expose_secret()),
        )
    }

    /// Send a request and decode the response.
    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        tracing::debug!(%method, path, "sending GitHub request");

        let mut request = self.request(method.clone(), path);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;

        self.handle_response(&method, path, response).await
    }

    /// Handle API response.
    async fn handle_response(
        &self,
        method: &Method,
        path: &str,
        response: reqwest::Response,
    ) -> Result<Value> {
        let status = response.status();

        if status.is_success() {
            let text = response.text().await?;
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_str(&text)?);
        }

        // Handle error responses
        let status_code = status.as_u16();
        tracing::warn!(%method, path, status = status_code, "GitHub request failed");

        match status_code {
            401 => Err(Error::AuthenticationFailed),
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(Error::ApiError {
                    status: status_code,
                    message: text,
                })
            }
        }
    }
}

impl Connector for GitHubClient {
    async fn get(&self, path: &str) -> Result<Value> {
        self.send(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.send(Method::POST, path, Some(body)).await
    }

    async fn patch(&self, path: &str, body: &Value) -> Result<Value> {
        self.send(Method::PATCH, path, Some(body)).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value> {
        self.send(Method::PUT, path, Some(body)).await
    }

    async fn delete(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.send(Method::DELETE, path, body).await
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url)
            .field("token", &"[redacted]")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> GitHubClient {
        let auth = Auth::Token(SecretString::from("test-token".to_string()));
        GitHubClient::with_base_url(&auth, server.uri()).unwrap()
    }

    #[tokio::test]
    async fn test_get_sends_auth_and_decodes_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/acme/widgets/pulls"))
            .and(query_param("state", "open"))
            .and(header("authorization", "Bearer test-token"))
            .and(header("accept", "application/vnd.github+json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"number": 1}])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let value = client
            .get("/repos/acme/widgets/pulls?state=open")
            .await
            .unwrap();

        assert_eq!(value, json!([{"number": 1}]));
    }

    #[tokio::test]
    async fn test_put_sends_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/repos/acme/widgets/pulls/7/merge"))
            .and(body_json(json!({"merge_method": "squash"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"merged": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let value = client
            .put(
                "/repos/acme/widgets/pulls/7/merge",
                &json!({"merge_method": "squash"}),
            )
            .await
            .unwrap();

        assert_eq!(value["merged"], json!(true));
    }

    #[tokio::test]
    async fn test_no_content_is_null() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/repos/acme/widgets/issues/7/labels/bug"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let value = client
            .delete("/repos/acme/widgets/issues/7/labels/bug", None)
            .await
            .unwrap();

        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_authentication_failed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.get("/user").await.unwrap_err();

        assert!(matches!(err, Error::AuthenticationFailed));
    }

    #[tokio::test]
    async fn test_api_error_keeps_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(
                ResponseTemplate::new(405).set_body_string("Pull Request is not mergeable"),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .put("/repos/acme/widgets/pulls/7/merge", &json!({}))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(405));
        assert!(err.to_string().contains("not mergeable"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let auth = Auth::Token(SecretString::from("ghp_secret".to_string()));
        let client = GitHubClient::with_base_url(&auth, "https://ghe.example.com/api/v3/").unwrap();

        let debug = format!("{client:?}");
        assert!(!debug.contains("ghp_secret"));
        assert_eq!(client.base_url(), "https://ghe.example.com/api/v3");
    }
}
