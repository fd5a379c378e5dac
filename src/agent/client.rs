//! Provider registry and factory.
//!
//! Maps provider names to concrete [`CompletionProvider`] implementations.

use crate::agent::config::AgentConfig;
use crate::agent::provider::CompletionProvider;
use crate::agent::providers::LiteLlmProvider;
use crate::error::AgentError;

/// Creates the configured [`CompletionProvider`].
///
/// Only `"litellm"` is known: any server exposing `/v1/completions`.
///
/// # Errors
///
/// Returns [`AgentError::UnsupportedProvider`] for any other name.
pub fn create_provider(config: &AgentConfig) -> Result<Box<dyn CompletionProvider>, AgentError> {
    match config.provider.as_str() {
        "litellm" => Ok(Box::new(LiteLlmProvider::new(config)?)),
        other => Err(AgentError::UnsupportedProvider {
            name: other.to_string(),
        }),
    }
}
