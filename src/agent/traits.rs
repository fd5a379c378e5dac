//! Agent trait definition.
//!
//! Panelists and the organizer's synthesizer both implement this trait,
//! which provides the one capability they share: framing a message with
//! the agent's identity and sending it as a completion request.

use async_trait::async_trait;

use super::message::{Completion, CompletionRequest};
use super::provider::CompletionProvider;
use crate::error::AgentError;

/// A named, role-tagged requester of completions.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Agent name for logging and prompt framing (e.g. `Agent_1`).
    fn name(&self) -> &str;

    /// Role the agent plays (e.g. `Physicist`).
    fn role(&self) -> &str;

    /// Model identifier to use for this agent.
    fn model(&self) -> &str;

    /// Maximum tokens for each response.
    fn max_tokens(&self) -> u32;

    /// Frames a message as `"{role} {name}: {message}"`.
    fn frame(&self, message: &str) -> String {
        format!("{} {}: {message}", self.role(), self.name())
    }

    /// Sends one framed completion request.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError`] on transport failures or malformed responses.
    async fn execute(
        &self,
        provider: &dyn CompletionProvider,
        message: &str,
    ) -> Result<Completion, AgentError> {
        let request = CompletionRequest::new(self.model(), self.frame(message), self.max_tokens());
        provider.complete(&request).await
    }

    /// Sends one framed request and returns only the trimmed text.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError`] on transport failures or malformed responses.
    async fn prompt(
        &self,
        provider: &dyn CompletionProvider,
        message: &str,
    ) -> Result<String, AgentError> {
        Ok(self.execute(provider, message).await?.text)
    }
}
