//! User service client and the HTTP transport it runs on.
//!
//! [`UserClient`] fetches one fixed user resource. It performs no status
//! handling, decoding or retrying: whatever the [`Transport`] returns,
//! response or error, is handed back unchanged.
//!
//! The client's base URL is [`constants::USERS_URL`], independent of the
//! per-environment `API_URL` in [`crate::config`].

pub mod http;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::constants;

pub use http::ReqwestTransport;

/// Errors from the HTTP transport.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("failed to read response body: {0}")]
    Body(String),
}

/// A response as produced by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, headers: Vec<(String, String)>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First header value matching `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body as text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

/// Capability to perform a single HTTP GET.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url).await
    }
}

/// Client for the user service.
pub struct UserClient<T = ReqwestTransport> {
    transport: T,
}

impl UserClient<ReqwestTransport> {
    /// Client over a default reqwest transport.
    pub fn new() -> Result<Self, TransportError> {
        Ok(Self::with_transport(ReqwestTransport::new()?))
    }
}

impl<T: Transport> UserClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// The fixed URL this client requests.
    pub fn user_url(&self) -> String {
        format!("{}/{}", constants::USERS_URL, constants::USER_ID)
    }

    /// Fetch the user resource with one GET.
    ///
    /// Every call issues its own request; nothing is cached.
    pub async fn fetch_user(&self) -> Result<HttpResponse, TransportError> {
        let url = self.user_url();
        tracing::debug!(%url, "fetching user");
        let response = self.transport.get(&url).await?;
        tracing::debug!(%url, status = response.status(), "user fetch completed");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Records every requested URL and replays a canned outcome.
    struct RecordingTransport {
        outcome: Result<HttpResponse, TransportError>,
        requests: Mutex<Vec<String>>,
    }

    impl RecordingTransport {
        fn new(outcome: Result<HttpResponse, TransportError>) -> Self {
            Self {
                outcome,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
            self.requests.lock().unwrap().push(url.to_string());
            self.outcome.clone()
        }
    }

    fn ok_response(body: &str) -> HttpResponse {
        HttpResponse::new(
            200,
            vec![("content-type".to_string(), "application/json".to_string())],
            body.as_bytes().to_vec(),
        )
    }

    #[test]
    fn user_url_is_fixed() {
        let transport = RecordingTransport::new(Ok(ok_response("")));
        let client = UserClient::with_transport(&transport);
        assert_eq!(client.user_url(), "https://example.dev/api/v1/users/1");
    }

    #[tokio::test]
    async fn fetch_user_issues_one_get_to_user_url() {
        let transport = RecordingTransport::new(Ok(ok_response("{}")));
        let client = UserClient::with_transport(&transport);

        client.fetch_user().await.unwrap();

        assert_eq!(transport.requests(), vec!["https://example.dev/api/v1/users/1"]);
    }

    #[tokio::test]
    async fn fetch_user_twice_issues_two_requests() {
        let transport = RecordingTransport::new(Ok(ok_response("{}")));
        let client = UserClient::with_transport(&transport);

        client.fetch_user().await.unwrap();
        client.fetch_user().await.unwrap();

        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn fetch_user_returns_response_unmodified() {
        let response = ok_response(r#"{"foo":"bar"}"#);
        let transport = RecordingTransport::new(Ok(response.clone()));
        let client = UserClient::with_transport(&transport);

        let got = client.fetch_user().await.unwrap();

        assert_eq!(got, response);
        assert_eq!(got.text(), r#"{"foo":"bar"}"#);
    }

    #[tokio::test]
    async fn fetch_user_passes_error_statuses_through() {
        let response = HttpResponse::new(404, vec![], b"not found".to_vec());
        let transport = RecordingTransport::new(Ok(response.clone()));
        let client = UserClient::with_transport(&transport);

        let got = client.fetch_user().await.unwrap();
        assert_eq!(got.status(), 404);
        assert!(!got.is_success());
        assert_eq!(got.body(), b"not found");
    }

    #[tokio::test]
    async fn fetch_user_propagates_transport_error() {
        let err = TransportError::Connect("connection refused".to_string());
        let transport = RecordingTransport::new(Err(err.clone()));
        let client = UserClient::with_transport(&transport);

        assert_eq!(client.fetch_user().await.unwrap_err(), err);
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let response = ok_response("");
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn text_replaces_invalid_utf8() {
        let response = HttpResponse::new(200, vec![], vec![b'o', b'k', 0xff]);
        assert_eq!(response.text(), "ok\u{fffd}");
        assert_eq!(response.into_body(), vec![b'o', b'k', 0xff]);
    }
}
