//! Orchestrator for discussion rounds.
//!
//! Coordinates the full pipeline for one question: classify → size →
//! spawn → prime and query each agent in turn → summarize → satisfaction
//! check. The interactive flow repeats the query-to-check steps with the
//! same panel until the organizer is satisfied; the batch flow skips the
//! check and records a numeric answer per question instead.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::info;

use super::config::AgentConfig;
use super::pool::{AgentPool, DiscussionResponse};
use super::provider::CompletionProvider;
use super::random::RandomSource;
use super::scaling::{PanelPlan, SizingStrategy};
use super::synthesizer::SynthesizerAgent;
use crate::batch::{AnswerCollector, extract_numeric_answer};
use crate::error::{AgentError, Error};

/// Output of one query-and-summarize pass over a panel.
#[derive(Debug, Clone, Serialize)]
pub struct RoundResult {
    /// Answers in agent order.
    pub responses: Vec<DiscussionResponse>,
    /// Organizer's summary of the answers.
    pub summary: String,
}

/// Output of an interactive discussion.
#[derive(Debug, Clone, Serialize)]
pub struct Discussion {
    /// The question discussed.
    pub question: String,
    /// Classification and sizing used for every round.
    pub plan: PanelPlan,
    /// Rounds run until the organizer was satisfied.
    pub rounds: usize,
    /// The accepted round.
    pub last_round: RoundResult,
    /// Wall-clock time across all rounds.
    #[serde(serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

/// Output of a batch run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// Questions discussed.
    pub processed: usize,
    /// Answers that fell back to the sentinel.
    pub unanswered: usize,
    /// Extracted answers in question order.
    pub answers: Vec<String>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_secs<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

/// Sequences classification, panel sizing, discussion and summarization.
///
/// Holds the organizer's summarizing identity ([`SynthesizerAgent`]) by
/// composition alongside the orchestration state.
pub struct Orchestrator {
    provider: Arc<dyn CompletionProvider>,
    config: AgentConfig,
    synthesizer: SynthesizerAgent,
    strategy: SizingStrategy,
    rng: Box<dyn RandomSource>,
}

impl Orchestrator {
    /// Creates an orchestrator.
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        config: AgentConfig,
        strategy: SizingStrategy,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let synthesizer = SynthesizerAgent::new(&config);
        Self {
            provider,
            config,
            synthesizer,
            strategy,
            rng,
        }
    }

    /// Sizing strategy in use.
    #[must_use]
    pub const fn strategy(&self) -> SizingStrategy {
        self.strategy
    }

    /// Classifies the question and decides the panel.
    pub fn plan(&mut self, question: &str) -> PanelPlan {
        let plan = self.strategy.plan(question, self.rng.as_mut());
        info!(
            "Organizer has determined that the difficulty of the question is '{}'.",
            plan.difficulty
        );
        if !plan.subjects.is_empty() {
            info!(
                "Organizer has identified the following areas of study: {}",
                plan.subjects.join(", ")
            );
        }
        info!(
            "Organizer has decided that {} agents are required for a '{}' question.",
            plan.agent_count(),
            plan.difficulty
        );
        plan
    }

    /// Spawns the panel described by `plan`.
    #[must_use]
    pub fn spawn(&self, plan: &PanelPlan) -> AgentPool {
        AgentPool::spawn(&self.config, &plan.roles)
    }

    /// Primes the panel, collects every answer and summarizes them.
    ///
    /// # Errors
    ///
    /// Propagates the first failed request; the round produces nothing.
    pub async fn run_round(
        &self,
        pool: &AgentPool,
        question: &str,
    ) -> Result<RoundResult, AgentError> {
        let provider = &*self.provider;
        pool.prime(provider, question, self.strategy).await?;
        let responses = pool.discuss(provider, question).await?;
        let summary = self.synthesizer.summarize(provider, &responses).await?;
        info!("Final summary from organizer: {summary}");
        Ok(RoundResult { responses, summary })
    }

    /// Coin-flip satisfaction check.
    pub fn is_satisfied(&mut self, _summary: &str) -> bool {
        let satisfied = self.rng.coin_flip();
        if satisfied {
            info!("Organizer is satisfied with the answer.");
        } else {
            info!("Organizer is not satisfied with the answer. Agents will discuss again.");
        }
        satisfied
    }

    /// Plans and spawns a panel once, then repeats rounds until satisfied.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::EmptyQuestion`] for a blank question, otherwise
    /// propagates the first failed request.
    pub async fn discuss_until_satisfied(
        &mut self,
        question: &str,
    ) -> Result<Discussion, AgentError> {
        if question.trim().is_empty() {
            return Err(AgentError::EmptyQuestion);
        }

        let start = Instant::now();
        let plan = self.plan(question);
        let pool = self.spawn(&plan);

        let mut rounds = 0;
        loop {
            rounds += 1;
            let round = self.run_round(&pool, question).await?;
            if self.is_satisfied(&round.summary) {
                return Ok(Discussion {
                    question: question.to_string(),
                    plan,
                    rounds,
                    last_round: round,
                    elapsed: start.elapsed(),
                });
            }
        }
    }

    /// Discusses each question once and records its numeric answer.
    ///
    /// # Errors
    ///
    /// Stops at the first failed request or failed write. Answers recorded
    /// before the failure stay recorded.
    pub async fn answer_batch(
        &mut self,
        questions: &[String],
        collector: &mut dyn AnswerCollector,
    ) -> Result<BatchReport, Error> {
        let mut report = BatchReport::default();

        for question in questions {
            info!("Processing question: {question}");
            let plan = self.plan(question);
            let pool = self.spawn(&plan);
            let round = self.run_round(&pool, question).await?;

            let answer = extract_numeric_answer(&round.summary);
            collector.record(&answer)?;
            info!("Numerical answer recorded: {answer}");

            if answer == crate::batch::NO_NUMERIC_ANSWER {
                report.unanswered += 1;
            }
            report.processed += 1;
            report.answers.push(answer);
        }

        Ok(report)
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("provider", &self.provider.name())
            .field("strategy", &self.strategy)
            .field("synthesizer", &self.synthesizer)
            .finish_non_exhaustive()
    }
}
