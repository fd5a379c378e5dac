//! Multi-agent discussion system.
//!
//! An organizer sizes a panel of role-tagged agents for each question,
//! asks them one at a time, and summarizes their answers through a
//! paginated completion loop.
//!
//! # Architecture
//!
//! ```text
//! Question → Orchestrator
//!   ├── SizingStrategy (difficulty tier, subject areas, agent count, roles)
//!   ├── AgentPool::spawn → Agent_1 … Agent_N
//!   ├── prime each agent, then ask each agent (sequential)
//!   ├── SynthesizerAgent → paginated summary
//!   └── satisfaction coin flip (interactive) | numeric answer (batch)
//! ```

pub mod client;
pub mod config;
pub mod difficulty;
pub mod message;
pub mod orchestrator;
pub mod panelist;
pub mod pool;
pub mod prompt;
pub mod provider;
pub mod providers;
pub mod random;
pub mod scaling;
pub mod subject;
pub mod synthesizer;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

// Re-export key types
pub use client::create_provider;
pub use config::AgentConfig;
pub use difficulty::{Difficulty, DifficultyClassifier, KeywordClassifier, LengthClassifier};
pub use message::{Completion, CompletionRequest};
pub use orchestrator::{BatchReport, Discussion, Orchestrator, RoundResult};
pub use panelist::Panelist;
pub use pool::{AgentPool, DiscussionResponse};
pub use provider::CompletionProvider;
pub use random::{RandomSource, StdRandom, random_source};
pub use scaling::{PanelPlan, SizingStrategy};
pub use subject::identify_subjects;
pub use synthesizer::SynthesizerAgent;
pub use traits::Agent;
