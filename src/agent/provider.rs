//! Pluggable completion provider trait.
//!
//! Implementations translate a provider-agnostic [`CompletionRequest`]
//! into a concrete transport call. This keeps agent logic decoupled
//! from any particular server.

use async_trait::async_trait;

use super::message::{Completion, CompletionRequest};
use crate::error::AgentError;

/// Trait for completion backends.
///
/// One call, one request: implementations never retry. A response whose
/// result field is missing is reported as [`AgentError::MalformedResponse`].
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name (e.g., `"litellm"`).
    fn name(&self) -> &'static str;

    /// Executes a single completion request and returns its first choice.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError`] on transport failures or malformed responses.
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, AgentError>;
}
