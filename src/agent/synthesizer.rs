//! Organizer's summarization of a discussion round.
//!
//! Summaries are paginated: each page is requested with a fixed token
//! budget and appended to the running summary. A page that does not end
//! with a stop signal becomes the prompt for the next page; the discussion
//! transcript is not sent again.

use async_trait::async_trait;
use tracing::debug;

use super::config::AgentConfig;
use super::pool::DiscussionResponse;
use super::prompt::build_summary_prompt;
use super::provider::CompletionProvider;
use super::traits::Agent;
use crate::error::AgentError;

/// Name the organizer uses when framing its own requests.
pub const ORGANIZER_NAME: &str = "Organizer";
/// Role the organizer uses when framing its own requests.
pub const ORGANIZER_ROLE: &str = "Central Organizer";

/// The organizer's summarizing identity.
///
/// Frames requests as `"Central Organizer Organizer: …"` like any other
/// agent and adds the pagination loop on top.
#[derive(Debug, Clone)]
pub struct SynthesizerAgent {
    model: String,
    max_tokens: u32,
    max_turns: Option<usize>,
}

impl SynthesizerAgent {
    /// Creates the synthesizer from configuration.
    #[must_use]
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            model: config.model.clone(),
            max_tokens: config.summary_max_tokens,
            max_turns: config.max_summary_turns,
        }
    }

    /// Summarizes the collected responses.
    ///
    /// # Errors
    ///
    /// Propagates the first request failure; no partial summary is returned.
    /// Returns [`AgentError::SummaryTurnsExceeded`] when a turn cap is
    /// configured and reached without a stop signal.
    pub async fn summarize(
        &self,
        provider: &dyn CompletionProvider,
        responses: &[DiscussionResponse],
    ) -> Result<String, AgentError> {
        self.paginate(provider, build_summary_prompt(responses))
            .await
    }

    /// Runs the pagination loop from an initial prompt.
    ///
    /// Without a turn cap this only ends when the server reports a stop.
    pub async fn paginate(
        &self,
        provider: &dyn CompletionProvider,
        initial_prompt: String,
    ) -> Result<String, AgentError> {
        let mut prompt = initial_prompt;
        let mut summary = String::new();
        let mut turn: usize = 0;

        loop {
            if let Some(max_turns) = self.max_turns
                && turn >= max_turns
            {
                return Err(AgentError::SummaryTurnsExceeded { max_turns });
            }
            turn += 1;

            let page = self.execute(provider, &prompt).await?;
            summary.push_str(&page.text);

            if page.is_stop() {
                debug!(turn, chars = summary.len(), "summary complete");
                return Ok(summary);
            }

            debug!(
                turn,
                finish_reason = ?page.finish_reason,
                "summary page incomplete, continuing from last page"
            );
            prompt = page.text;
        }
    }
}

#[async_trait]
impl Agent for SynthesizerAgent {
    fn name(&self) -> &str {
        ORGANIZER_NAME
    }

    fn role(&self) -> &str {
        ORGANIZER_ROLE
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn max_tokens(&self) -> u32 {
        self.max_tokens
    }
}
