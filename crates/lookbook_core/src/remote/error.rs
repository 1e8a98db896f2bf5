//! Remote failure taxonomy.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Parsed error body of a non-success response.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorDetails {
    Json(serde_json::Value),
    Text(String),
}

impl ErrorDetails {
    /// Parses `body` as JSON, falling back to the raw text.
    pub fn parse(body: &str) -> Self {
        match serde_json::from_str(body) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(body.to_string()),
        }
    }

    /// Best-effort one-line summary, preferring the store's `error.message`.
    pub fn summary(&self) -> String {
        match self {
            Self::Json(value) => value
                .pointer("/error/message")
                .or_else(|| value.pointer("/error/type"))
                .or_else(|| value.get("error"))
                .or_else(|| value.get("message"))
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_else(|| value.to_string()),
            Self::Text(text) => text.clone(),
        }
    }
}

/// Failure talking to a remote API.
///
/// `status` is `Some` when the server answered with a non-success status and
/// `None` for network-level or response-parsing failures.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteError {
    pub message: String,
    pub status: Option<u16>,
    pub details: Option<ErrorDetails>,
}

impl RemoteError {
    /// Non-success HTTP response.
    pub fn with_status(message: impl Into<String>, status: u16, body: &str) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
            details: Some(ErrorDetails::parse(body)),
        }
    }

    /// Network failure or unparseable response.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            details: None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }
}

impl Display for RemoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)?;
        if let Some(details) = &self.details {
            let summary = details.summary();
            if !summary.is_empty() {
                write!(f, " ({summary})")?;
            }
        }
        Ok(())
    }
}

impl Error for RemoteError {}

/// The transport could not produce a response at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "transport error: {}", self.message)
    }
}

impl Error for TransportError {}
