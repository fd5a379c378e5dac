//! CLI layer for roundtable.
//!
//! Provides the command-line interface using clap, with commands for
//! interactive discussion, batch answering and offline classification.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::{build_config, execute, run_session};
pub use output::{BatchSummary, OutputFormat};
pub use parser::{Cli, Commands};
