//! Discussion panel member.

use async_trait::async_trait;
use serde::Serialize;

use super::config::AgentConfig;
use super::traits::Agent;

/// One agent spawned for a discussion round.
///
/// Immutable once created; the pool drops it when the round ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panelist {
    name: String,
    role: String,
    model: String,
    max_tokens: u32,
}

impl Panelist {
    /// Creates a panelist with the configured model and agent token budget.
    #[must_use]
    pub fn new(config: &AgentConfig, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            model: config.model.clone(),
            max_tokens: config.agent_max_tokens,
        }
    }
}

#[async_trait]
impl Agent for Panelist {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> &str {
        &self.role
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn max_tokens(&self) -> u32 {
        self.max_tokens
    }
}
