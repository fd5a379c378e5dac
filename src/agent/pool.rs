//! The set of agents taking part in one discussion round.
//!
//! Agents are queried strictly one at a time, in spawn order. The first
//! failed request aborts the round.

use serde::Serialize;
use tracing::{debug, info};

use super::config::AgentConfig;
use super::panelist::Panelist;
use super::prompt::build_intro_prompt;
use super::provider::CompletionProvider;
use super::scaling::SizingStrategy;
use super::traits::Agent;
use crate::error::AgentError;

/// One agent's answer in a discussion round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscussionResponse {
    /// Agent name (e.g. `Agent_1`).
    pub agent: String,
    /// Agent role.
    pub role: String,
    /// Trimmed response text.
    pub text: String,
}

/// Agents spawned for a round, named `Agent_1 … Agent_N`.
#[derive(Debug, Clone, Default)]
pub struct AgentPool {
    agents: Vec<Panelist>,
}

impl AgentPool {
    /// Spawns one agent per role.
    #[must_use]
    pub fn spawn(config: &AgentConfig, roles: &[String]) -> Self {
        let agents = roles
            .iter()
            .enumerate()
            .map(|(i, role)| Panelist::new(config, format!("Agent_{}", i + 1), role.as_str()))
            .collect();
        Self { agents }
    }

    /// The spawned agents, in query order.
    #[must_use]
    pub fn agents(&self) -> &[Panelist] {
        &self.agents
    }

    /// Number of agents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Returns `true` if no agents were spawned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Primes every agent with its role and the question.
    ///
    /// Responses are logged and discarded.
    pub async fn prime(
        &self,
        provider: &dyn CompletionProvider,
        question: &str,
        strategy: SizingStrategy,
    ) -> Result<(), AgentError> {
        for agent in &self.agents {
            let message = build_intro_prompt(&strategy.role_phrase(agent.role()), question);
            let reply = agent.prompt(provider, &message).await?;
            debug!(agent = agent.name(), role = agent.role(), reply = %reply, "agent primed");
        }
        Ok(())
    }

    /// Asks every agent the question and collects the answers in order.
    pub async fn discuss(
        &self,
        provider: &dyn CompletionProvider,
        question: &str,
    ) -> Result<Vec<DiscussionResponse>, AgentError> {
        let mut responses = Vec::with_capacity(self.agents.len());
        for agent in &self.agents {
            let text = agent.prompt(provider, question).await?;
            info!(agent = agent.name(), role = agent.role(), "{text}");
            responses.push(DiscussionResponse {
                agent: agent.name().to_string(),
                role: agent.role().to_string(),
                text,
            });
        }
        Ok(responses)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::agent::mock::ScriptedProvider;

    fn config() -> AgentConfig {
        AgentConfig::builder()
            .build()
            .unwrap_or_else(|_| unreachable!())
    }

    fn roles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_spawn_names_agents_in_order() {
        let pool = AgentPool::spawn(&config(), &roles(&["Physicist", "Generalist"]));
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.agents()[0].name(), "Agent_1");
        assert_eq!(pool.agents()[0].role(), "Physicist");
        assert_eq!(pool.agents()[1].name(), "Agent_2");
        assert_eq!(pool.agents()[1].role(), "Generalist");
    }

    #[tokio::test]
    async fn test_discuss_queries_sequentially() {
        let provider = ScriptedProvider::new().stop("first").stop("second");
        let pool = AgentPool::spawn(&config(), &roles(&["Physicist", "Generalist"]));

        let responses = pool
            .discuss(&provider, "Why is the sky blue?")
            .await
            .unwrap_or_else(|e| panic!("discuss failed: {e}"));

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].agent, "Agent_1");
        assert_eq!(responses[0].text, "first");
        assert_eq!(responses[1].agent, "Agent_2");
        assert_eq!(responses[1].text, "second");
        assert_eq!(
            provider.prompts(),
            vec![
                "Physicist Agent_1: Why is the sky blue?",
                "Generalist Agent_2: Why is the sky blue?",
            ]
        );
    }

    #[tokio::test]
    async fn test_prime_uses_role_phrase() {
        let provider = ScriptedProvider::new().with_fallback("ok");
        let pool = AgentPool::spawn(&config(), &roles(&["Agent 1"]));

        pool.prime(&provider, "2+2?", SizingStrategy::Length)
            .await
            .unwrap_or_else(|e| panic!("prime failed: {e}"));

        assert_eq!(
            provider.prompts(),
            vec!["Agent 1 Agent_1: You are Agent 1. Here is the question to discuss: '2+2?'"]
        );
    }

    #[tokio::test]
    async fn test_discuss_aborts_on_first_failure() {
        let provider = ScriptedProvider::new().stop("fine").malformed().stop("unused");
        let pool = AgentPool::spawn(&config(), &roles(&["A", "B", "C"]));

        let result = pool.discuss(&provider, "q").await;

        assert!(matches!(result, Err(AgentError::MalformedResponse { .. })));
        assert_eq!(provider.calls(), 2);
    }
}
