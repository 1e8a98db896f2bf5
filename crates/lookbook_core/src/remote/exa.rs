//! Text-generation helper (Exa chat completions) client.

use crate::config::ExaConfig;
use crate::error::LookbookResult;
use crate::remote::error::RemoteError;
use crate::remote::transport::{HttpMethod, HttpRequest, HttpTransport};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 300;

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: Option<CompletionMessage>,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// Stateless chat-completion client.
#[derive(Clone)]
pub struct ExaClient {
    config: ExaConfig,
    transport: Arc<dyn HttpTransport>,
}

impl ExaClient {
    pub fn new(config: ExaConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Sends one system+user exchange and returns the first choice's text.
    ///
    /// # Errors
    /// - `Configuration` when no API key is set; nothing is sent.
    /// - `Remote` with status for non-success responses.
    /// - `Remote` without status for network failures or a response without
    ///   `choices[0].message.content`.
    pub fn complete(&self, system: &str, user: &str) -> LookbookResult<String> {
        let config = self.config.require()?;
        let url = format!("{}/chat/completions", config.api_url.trim_end_matches('/'));
        let body = json!({
            "model": config.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        });
        let request = HttpRequest::with_body(HttpMethod::Post, url, config.api_key.as_str(), body);

        let response = self.transport.send(&request).map_err(|err| {
            warn!("event=exa_request module=remote status=error kind=network");
            RemoteError::unavailable(format!(
                "Failed to generate description: Network error or invalid response ({err})"
            ))
        })?;
        debug!(
            "event=exa_request module=remote status=done http_status={}",
            response.status
        );

        if !response.is_success() {
            return Err(RemoteError::with_status(
                format!(
                    "Failed to generate description: {} {}",
                    response.status, response.status_text
                )
                .trim_end()
                .to_string(),
                response.status,
                &response.body,
            )
            .into());
        }

        let parsed: CompletionResponse = serde_json::from_str(&response.body)
            .map_err(|_| RemoteError::unavailable("Invalid response format from Exa API"))?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or_else(|| RemoteError::unavailable("Invalid response format from Exa API").into())
    }
}
