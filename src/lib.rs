//! # roundtable
//!
//! Simulated multi-agent discussion over a text completion server.
//!
//! For each question an organizer estimates difficulty and subject areas,
//! spawns a matching panel of role-tagged agents, asks each of them in
//! turn, and pages through a summary of their answers. The interactive
//! CLI repeats rounds until the organizer is satisfied; the batch CLI
//! extracts one numeric answer per question from a JSONL file.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use roundtable::agent::{AgentConfig, Orchestrator, SizingStrategy, create_provider, random_source};
//!
//! # async fn run() -> Result<(), roundtable::AgentError> {
//! let config = AgentConfig::from_env()?;
//! let provider = Arc::from(create_provider(&config)?);
//! let mut organizer =
//!     Orchestrator::new(provider, config, SizingStrategy::Keyword, random_source(None));
//! let discussion = organizer.discuss_until_satisfied("Why is the sky blue?").await?;
//! assert!(discussion.rounds >= 1);
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod batch;
pub mod cli;
pub mod error;

pub use error::{AgentError, BatchError, CommandError, Error, Result};
