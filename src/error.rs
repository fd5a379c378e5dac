//! Error types for roundtable.
//!
//! Each layer has its own error enum; [`Error`] unifies them for the CLI.
//! Agent errors are terminal for the current discussion round: nothing in
//! the crate retries a failed completion.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used by the CLI layer.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Completion or discussion failure.
    #[error(transparent)]
    Agent(#[from] AgentError),

    /// Batch input/output failure.
    #[error(transparent)]
    Batch(#[from] BatchError),

    /// CLI command failure.
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Errors raised while talking to the completion endpoint or running a round.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The HTTP request failed or returned a non-success status.
    #[error("completion request failed: {message}")]
    ApiRequest {
        /// Human-readable failure description.
        message: String,
        /// HTTP status code, when the server answered at all.
        status: Option<u16>,
    },

    /// The endpoint answered but the body lacks the expected result field.
    #[error("malformed completion response: {message}")]
    MalformedResponse {
        /// What was missing or wrong.
        message: String,
        /// The raw response body.
        body: String,
    },

    /// Summary pagination hit the configured turn cap without a stop signal.
    #[error("summary did not finish within {max_turns} turns")]
    SummaryTurnsExceeded {
        /// Configured cap.
        max_turns: usize,
    },

    /// Invalid configuration value.
    #[error("invalid configuration: {message}")]
    Config {
        /// Which value was rejected and why.
        message: String,
    },

    /// The configured provider name has no implementation.
    #[error("unsupported provider: {name}")]
    UnsupportedProvider {
        /// The rejected provider name.
        name: String,
    },

    /// A discussion was requested for a blank question.
    #[error("question cannot be empty")]
    EmptyQuestion,
}

/// Errors raised while reading questions or writing answers.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Underlying file I/O failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Source error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by CLI command handlers.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command could not complete.
    #[error("{0}")]
    ExecutionFailed(String),

    /// A flag or argument value was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Output serialization failed.
    #[error("output formatting failed: {0}")]
    OutputFormat(String),
}
