//! reqwest-backed [`Transport`].

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use super::{HttpResponse, Transport, TransportError};
use crate::constants::USER_AGENT;

/// Performs GETs with a shared `reqwest::Client`.
///
/// No request timeout is set; a request runs until the server answers
/// or the connection fails.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TransportError::Request(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify(url, e))?;

        let status = resp.status().as_u16();
        let headers = header_pairs(resp.headers());

        let body = resp
            .bytes()
            .await
            .map_err(|e| TransportError::Body(format!("{url}: {e}")))?;

        Ok(HttpResponse::new(status, headers, body.to_vec()))
    }
}

/// Every header, in order. Non-UTF-8 values are decoded lossily.
fn header_pairs(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

fn classify(url: &str, e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout(format!("{url}: {e}"))
    } else if e.is_connect() {
        TransportError::Connect(format!("{url}: {e}"))
    } else {
        TransportError::Request(format!("{url}: {e}"))
    }
}
