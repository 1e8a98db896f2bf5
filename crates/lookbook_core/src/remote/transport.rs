//! Blocking HTTP transport seam.
//!
//! # Responsibility
//! - Describe one outbound request/response pair independent of the HTTP
//!   library.
//! - Provide the production `reqwest` implementation.
//!
//! # Invariants
//! - Transports never interpret status codes; classification happens in the
//!   API clients.
//! - Implementations are `Send + Sync` so one transport can serve concurrent
//!   lookups.

use crate::remote::error::TransportError;
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
        }
    }
}

/// One outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Sent as `Authorization: Bearer <token>`.
    pub bearer_token: String,
    /// Serialized as a JSON body when present.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>, bearer_token: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            bearer_token: bearer_token.into(),
            body: None,
        }
    }

    pub fn with_body(
        method: HttpMethod,
        url: impl Into<String>,
        bearer_token: impl Into<String>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            method,
            url: url.into(),
            bearer_token: bearer_token.into(),
            body: Some(body),
        }
    }
}

/// Raw response: status line plus undecoded body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests and returns whatever the server answered.
pub trait HttpTransport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// `reqwest` blocking client transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|err| TransportError::new(format!("failed to build http client: {err}")))?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Patch => self.client.patch(&request.url),
        };
        let mut builder = builder.header(AUTHORIZATION, format!("Bearer {}", request.bearer_token));
        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_string());
        }

        let response = builder
            .send()
            .map_err(|err| TransportError::new(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|err| TransportError::new(format!("failed to read response body: {err}")))?;

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::HttpResponse;

    #[test]
    fn success_range_is_2xx() {
        let response = |status| HttpResponse {
            status,
            status_text: String::new(),
            body: String::new(),
        };
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(301).is_success());
        assert!(!response(401).is_success());
    }
}
