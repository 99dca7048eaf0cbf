//! HTTP transport bound to an existing remote session.
//!
//! Session creation and teardown are the caller's business; this transport
//! only needs the session root URL, e.g.
//! `http://localhost:4444/wd/hub/session/3f2a...`.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use webdriver_element::{HttpTransport, Session};
//!
//! let transport = HttpTransport::new("http://localhost:4444/wd/hub", "3f2a9c")?;
//! let session = Session::builder(Arc::new(transport)).build();
//! ```

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;
use url::Url;

use crate::config::HttpConfig;
use crate::error::{Error, Result};
use crate::protocol::{HttpMethod, PendingCommand, Response};

use super::Transport;

// ============================================================================
// HttpTransport
// ============================================================================

/// `reqwest`-backed [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    session_url: String,
}

impl HttpTransport {
    /// Creates a transport for `session_id` on the remote end at `base_url`.
    ///
    /// # Errors
    ///
    /// - [`Error::Url`] if `base_url` is not a valid URL
    /// - [`Error::Http`] if the client cannot be built
    pub fn new(base_url: &str, session_id: &str) -> Result<Self> {
        Self::with_config(base_url, session_id, HttpConfig::default())
    }

    /// Creates a transport with explicit HTTP settings.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_config(base_url: &str, session_id: &str, config: HttpConfig) -> Result<Self> {
        let base = Url::parse(base_url)?;
        let session_url = format!(
            "{}/session/{}",
            base.as_str().trim_end_matches('/'),
            urlencoding::encode(session_id)
        );

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            session_url,
        })
    }

    /// Returns the session root URL.
    #[inline]
    #[must_use]
    pub fn session_url(&self) -> &str {
        &self.session_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn issue_command(&self, command: PendingCommand) -> Result<Value> {
        let url = format!("{}{}", self.session_url, command.path);
        debug!(method = %command.method, path = %command.path, "Issuing command");

        let request = match command.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self
                .client
                .post(&url)
                .json(&command.data.unwrap_or_else(|| json!({}))),
        };

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        match Response::from_body(&body) {
            Ok(decoded) => match decoded.into_result(status.is_success()) {
                Ok(_) if !status.is_success() => {
                    Err(Error::transport(format!("HTTP {status} for {url}: {body}")))
                }
                result => result,
            },
            Err(_) if !status.is_success() => {
                Err(Error::transport(format!("HTTP {status} for {url}: {body}")))
            }
            Err(err) => Err(err),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::browser::selector::By;
    use crate::identifiers::ElementId;

    async fn transport(server: &MockServer) -> HttpTransport {
        HttpTransport::new(&format!("{}/wd/hub", server.uri()), "s1").expect("transport")
    }

    #[test]
    fn test_session_url() {
        let transport = HttpTransport::new("http://localhost:4444/wd/hub/", "abc").expect("transport");
        assert_eq!(transport.session_url(), "http://localhost:4444/wd/hub/session/abc");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpTransport::new("not a url", "abc"),
            Err(Error::Url(_))
        ));
    }

    #[tokio::test]
    async fn test_get_returns_value() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wd/hub/session/s1/element/e1/text"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"sessionId":"s1","status":0,"value":"Hello"}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let value = transport(&server)
            .await
            .issue_command(PendingCommand::get("/element/e1/text"))
            .await
            .expect("value");
        assert_eq!(value, Value::String("Hello".into()));
    }

    #[tokio::test]
    async fn test_post_without_body_sends_empty_object() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/wd/hub/session/s1/element/e1/click"))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":0,"value":null}"#))
            .expect(1)
            .mount(&server)
            .await;

        transport(&server)
            .await
            .issue_command(PendingCommand::post("/element/e1/click", None))
            .await
            .expect("click");
    }

    #[tokio::test]
    async fn test_stale_error_mapped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wd/hub/session/s1/element/e1/name"))
            .respond_with(ResponseTemplate::new(404).set_body_string(
                r#"{"value":{"error":"stale element reference","message":"detached"}}"#,
            ))
            .mount(&server)
            .await;

        let err = transport(&server)
            .await
            .issue_command(PendingCommand::get("/element/e1/name"))
            .await
            .unwrap_err();
        assert!(err.is_stale());
    }

    #[tokio::test]
    async fn test_success_body_with_error_field_is_value() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/wd/hub/session/s1/execute"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"value":{"error":"stale element reference","message":"form field"}}"#,
            ))
            .mount(&server)
            .await;

        let value = transport(&server)
            .await
            .issue_command(PendingCommand::post(
                "/execute",
                Some(json!({ "script": "return arguments[0].dataset", "args": [] })),
            ))
            .await
            .expect("value");
        assert_eq!(
            value,
            json!({ "error": "stale element reference", "message": "form field" })
        );
    }

    #[tokio::test]
    async fn test_non_json_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let err = transport(&server)
            .await
            .issue_command(PendingCommand::get("/element/e1/text"))
            .await
            .unwrap_err();
        assert!(err.is_transport_error());
        assert!(err.to_string().contains("502"));
    }

    #[tokio::test]
    async fn test_scoped_find_uses_default_lookup() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/wd/hub/session/s1/element/parent/element"))
            .and(body_json(json!({"using": "css selector", "value": ".child"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"status":0,"value":{"ELEMENT":"c1"}}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let parent = ElementId::new("parent");
        let id = transport(&server)
            .await
            .find_one(&By::css(".child"), Some(&parent))
            .await
            .expect("child");
        assert_eq!(id, ElementId::new("c1"));
    }
}
