//! Agent configuration with builder pattern and environment variable support.
//!
//! Configuration is resolved in order: explicit values → environment variables → defaults.

use crate::error::AgentError;

/// Default completion server base URL (a local LiteLLM proxy).
pub const DEFAULT_BASE_URL: &str = "http://0.0.0.0:4000";
/// Default model identifier passed through to the server.
pub const DEFAULT_MODEL: &str = "ollama/llama3.2:latest";
/// Default provider name.
const DEFAULT_PROVIDER: &str = "litellm";
/// Default token budget for each agent request.
const DEFAULT_AGENT_MAX_TOKENS: u32 = 300;
/// Default token budget for each summary page.
const DEFAULT_SUMMARY_MAX_TOKENS: u32 = 300;

/// Configuration for the discussion system.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Completion provider name (e.g., "litellm").
    pub provider: String,
    /// Server base URL; the completions path is appended to it.
    pub base_url: String,
    /// Optional bearer token for servers that require one.
    pub api_key: Option<String>,
    /// Model identifier used by every agent and the organizer.
    pub model: String,
    /// Maximum tokens for each agent response.
    pub agent_max_tokens: u32,
    /// Maximum tokens for each summary page.
    pub summary_max_tokens: u32,
    /// Cap on summary pagination turns.
    ///
    /// `None` keeps paginating until the server signals a stop, however
    /// long that takes.
    pub max_summary_turns: Option<usize>,
}

impl AgentConfig {
    /// Creates a new builder for `AgentConfig`.
    #[must_use]
    pub fn builder() -> AgentConfigBuilder {
        AgentConfigBuilder::default()
    }

    /// Creates configuration from environment variables with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::Config`] if a resolved value is invalid.
    pub fn from_env() -> Result<Self, AgentError> {
        Self::builder().from_env().build()
    }
}

/// Builder for [`AgentConfig`].
#[derive(Debug, Clone, Default)]
pub struct AgentConfigBuilder {
    provider: Option<String>,
    base_url: Option<String>,
    api_key: Option<String>,
    model: Option<String>,
    agent_max_tokens: Option<u32>,
    summary_max_tokens: Option<u32>,
    max_summary_turns: Option<usize>,
}

impl AgentConfigBuilder {
    /// Populates unset fields from environment variables.
    #[must_use]
    pub fn from_env(mut self) -> Self {
        if self.provider.is_none() {
            self.provider = std::env::var("ROUNDTABLE_PROVIDER").ok();
        }
        if self.base_url.is_none() {
            self.base_url = std::env::var("ROUNDTABLE_BASE_URL").ok();
        }
        if self.api_key.is_none() {
            self.api_key = std::env::var("ROUNDTABLE_API_KEY").ok();
        }
        if self.model.is_none() {
            self.model = std::env::var("ROUNDTABLE_MODEL").ok();
        }
        if self.agent_max_tokens.is_none() {
            self.agent_max_tokens = std::env::var("ROUNDTABLE_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok());
        }
        if self.summary_max_tokens.is_none() {
            self.summary_max_tokens = std::env::var("ROUNDTABLE_SUMMARY_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok());
        }
        if self.max_summary_turns.is_none() {
            self.max_summary_turns = std::env::var("ROUNDTABLE_MAX_SUMMARY_TURNS")
                .ok()
                .and_then(|v| v.parse().ok());
        }
        self
    }

    /// Sets the provider name.
    #[must_use]
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Sets the server base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the bearer token.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the model identifier.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the per-agent token budget.
    #[must_use]
    pub const fn agent_max_tokens(mut self, n: u32) -> Self {
        self.agent_max_tokens = Some(n);
        self
    }

    /// Sets the per-page summary token budget.
    #[must_use]
    pub const fn summary_max_tokens(mut self, n: u32) -> Self {
        self.summary_max_tokens = Some(n);
        self
    }

    /// Caps summary pagination at `n` turns.
    #[must_use]
    pub const fn max_summary_turns(mut self, n: usize) -> Self {
        self.max_summary_turns = Some(n);
        self
    }

    /// Builds the [`AgentConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::Config`] for an empty base URL or model, a zero
    /// token budget, or a zero summary-turn cap.
    pub fn build(self) -> Result<AgentConfig, AgentError> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if base_url.trim().is_empty() {
            return Err(config_error("base URL cannot be empty"));
        }

        let model = self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        if model.trim().is_empty() {
            return Err(config_error("model cannot be empty"));
        }

        let agent_max_tokens = self.agent_max_tokens.unwrap_or(DEFAULT_AGENT_MAX_TOKENS);
        let summary_max_tokens = self
            .summary_max_tokens
            .unwrap_or(DEFAULT_SUMMARY_MAX_TOKENS);
        if agent_max_tokens == 0 || summary_max_tokens == 0 {
            return Err(config_error("token budgets must be greater than zero"));
        }

        if self.max_summary_turns == Some(0) {
            return Err(config_error("max summary turns must be greater than zero"));
        }

        Ok(AgentConfig {
            provider: self
                .provider
                .unwrap_or_else(|| DEFAULT_PROVIDER.to_string()),
            base_url,
            api_key: self.api_key.filter(|k| !k.is_empty()),
            model,
            agent_max_tokens,
            summary_max_tokens,
            max_summary_turns: self.max_summary_turns,
        })
    }
}

fn config_error(message: &str) -> AgentError {
    AgentError::Config {
        message: message.to_string(),
    }
}
