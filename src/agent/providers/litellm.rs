//! LiteLLM-style text completion provider over plain HTTP.
//!
//! Posts `{model, prompt, max_tokens}` to `<base_url>/v1/completions` and
//! reads the first entry of the `choices` array. Works with any server that
//! implements the legacy `OpenAI` completions route.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::agent::config::AgentConfig;
use crate::agent::message::{Completion, CompletionRequest};
use crate::agent::provider::CompletionProvider;
use crate::error::AgentError;

/// Path appended to the configured base URL.
pub const COMPLETIONS_PATH: &str = "/v1/completions";

/// HTTP completion provider.
#[derive(Debug, Clone)]
pub struct LiteLlmProvider {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl LiteLlmProvider {
    /// Creates a provider from agent configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::Config`] if the HTTP client cannot be built.
    pub fn new(config: &AgentConfig) -> Result<Self, AgentError> {
        // No request timeout: a hung server blocks the round.
        let client = Client::builder().build().map_err(|e| AgentError::Config {
            message: format!("failed to build HTTP client: {e}"),
        })?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}{COMPLETIONS_PATH}",
                config.base_url.trim_end_matches('/')
            ),
            api_key: config.api_key.clone(),
        })
    }

    /// Full URL requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Extracts the first choice from a raw response body.
    fn parse_completion(body: &str) -> Result<Completion, AgentError> {
        let malformed = |message: &str| AgentError::MalformedResponse {
            message: message.to_string(),
            body: body.to_string(),
        };

        let value: Value = serde_json::from_str(body)
            .map_err(|e| malformed(&format!("response is not valid JSON: {e}")))?;

        let choices = value
            .get("choices")
            .ok_or_else(|| malformed("the response does not contain the expected 'choices' key"))?
            .as_array()
            .ok_or_else(|| malformed("'choices' is not an array"))?;

        let first = choices
            .first()
            .ok_or_else(|| malformed("'choices' is empty"))?;

        let text = first
            .get("text")
            .and_then(Value::as_str)
            .ok_or_else(|| malformed("first choice has no 'text' field"))?;

        let finish_reason = first
            .get("finish_reason")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Completion {
            text: text.trim().to_string(),
            finish_reason,
        })
    }
}

#[async_trait]
impl CompletionProvider for LiteLlmProvider {
    fn name(&self) -> &'static str {
        "litellm"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, AgentError> {
        debug!(endpoint = %self.endpoint, model = %request.model, "sending completion request");

        let mut call = self.client.post(&self.endpoint).json(request);
        if let Some(ref key) = self.api_key {
            call = call.bearer_auth(key);
        }

        let response = call.send().await.map_err(|e| AgentError::ApiRequest {
            message: e.to_string(),
            status: e.status().map(|s| s.as_u16()),
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| AgentError::ApiRequest {
            message: format!("failed to read response body: {e}"),
            status: Some(status.as_u16()),
        })?;

        debug!(status = status.as_u16(), body = %body, "full completion response");

        if !status.is_success() {
            warn!(status = status.as_u16(), "completion endpoint returned an error");
            return Err(AgentError::ApiRequest {
                message: format!("{status}: {body}"),
                status: Some(status.as_u16()),
            });
        }

        Self::parse_completion(&body)
    }
}
