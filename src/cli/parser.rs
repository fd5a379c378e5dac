//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::agent::SizingStrategy;

/// roundtable: multi-agent discussion over a text completion server.
///
/// Sizes a panel of role-tagged agents for each question, asks each of
/// them in turn, and summarizes their answers.
#[derive(Parser, Debug)]
#[command(name = "roundtable")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Completion server base URL (`/v1/completions` is appended).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Model identifier sent with every request.
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Token budget for each agent response.
    #[arg(long, global = true)]
    pub max_tokens: Option<u32>,

    /// Token budget for each summary page.
    #[arg(long, global = true)]
    pub summary_max_tokens: Option<u32>,

    /// Stop summary pagination after this many pages (unbounded by default).
    #[arg(long, global = true)]
    pub max_summary_turns: Option<usize>,

    /// Seed for agent-count and satisfaction draws.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discuss a question interactively, with follow-up questions.
    ///
    /// Rounds repeat with the same panel until the organizer is satisfied.
    #[command(after_help = r#"Examples:
  roundtable ask                                   # Prompt for a question
  roundtable ask "Why do planets orbit the sun?"
  roundtable ask --strategy length "What is 12*7?"
  roundtable --base-url http://localhost:4000 --seed 7 ask "Explain entropy"
"#)]
    Ask {
        /// Question to discuss (prompted for when omitted).
        question: Option<String>,

        /// Sizing strategy (keyword, length).
        #[arg(short, long, default_value = "keyword")]
        strategy: SizingStrategy,
    },

    /// Answer every question in a JSONL file, one numeric answer per line.
    #[command(after_help = r#"Examples:
  roundtable batch                                 # test.jsonl -> result.txt
  roundtable batch -i gsm8k.jsonl -o answers.txt
  roundtable --format json batch | jq '.processed'
"#)]
    Batch {
        /// Line-delimited JSON file with a "question" field per line.
        #[arg(short, long, default_value = "test.jsonl")]
        input: PathBuf,

        /// Answer file (truncated at start).
        #[arg(short, long, default_value = "result.txt")]
        output: PathBuf,

        /// Sizing strategy (keyword, length).
        #[arg(short, long, default_value = "length")]
        strategy: SizingStrategy,
    },

    /// Show difficulty, subject areas and panel for a question without
    /// contacting the server.
    #[command(after_help = r#"Examples:
  roundtable classify "Prove the theorem of Pythagoras"
  roundtable classify --strategy length "What is 2+2?"
  roundtable --format json classify "How does climate affect trade?"
"#)]
    Classify {
        /// Question to classify.
        question: String,

        /// Sizing strategy (keyword, length).
        #[arg(short, long, default_value = "keyword")]
        strategy: SizingStrategy,
    },
}
