//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

#![allow(clippy::uninlined_format_args)]

use crate::agent::{
    AgentConfig, Orchestrator, SizingStrategy, create_provider, random_source,
};
use crate::batch::{AnswerSink, read_questions};
use crate::cli::output::{
    BatchSummary, OutputFormat, format_batch_summary, format_discussion, format_plan,
};
use crate::cli::parser::{Cli, Commands};
use crate::error::{CommandError, Result};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::{info, warn};

/// Prompt shown before the first question of an interactive session.
pub const QUESTION_PROMPT: &str = "Enter your question: ";

/// Prompt shown after each accepted summary.
pub const FOLLOW_UP_PROMPT: &str =
    "Do you have a follow-up question? (Enter 'yes' to continue or 'no' to exit): ";

/// Prompt shown before a follow-up question.
pub const FOLLOW_UP_QUESTION_PROMPT: &str = "Enter your follow-up question: ";

/// Closing line of an interactive session.
pub const SESSION_END: &str = "Ending the discussion.";

/// Executes the CLI command.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Ask { question, strategy } => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            cmd_ask(
                cli,
                question.clone(),
                *strategy,
                format,
                &mut input,
                &mut output,
            )
        }
        Commands::Batch {
            input,
            output,
            strategy,
        } => cmd_batch(cli, input, output, *strategy, format),
        Commands::Classify { question, strategy } => {
            cmd_classify(cli, question, *strategy, format)
        }
    }
}

/// Builds agent configuration from the environment plus CLI overrides.
pub fn build_config(cli: &Cli) -> Result<AgentConfig> {
    let mut builder = AgentConfig::builder();
    if let Some(url) = &cli.base_url {
        builder = builder.base_url(url);
    }
    if let Some(model) = &cli.model {
        builder = builder.model(model);
    }
    if let Some(n) = cli.max_tokens {
        builder = builder.agent_max_tokens(n);
    }
    if let Some(n) = cli.summary_max_tokens {
        builder = builder.summary_max_tokens(n);
    }
    if let Some(n) = cli.max_summary_turns {
        builder = builder.max_summary_turns(n);
    }

    builder.from_env().build().map_err(|e| {
        CommandError::ExecutionFailed(format!("Agent configuration error: {e}")).into()
    })
}

fn build_orchestrator(cli: &Cli, strategy: SizingStrategy) -> Result<Orchestrator> {
    let config = build_config(cli)?;
    let provider = create_provider(&config).map_err(|e| {
        CommandError::ExecutionFailed(format!("Provider creation failed: {e}"))
    })?;
    info!(
        provider = provider.name(),
        base_url = %config.base_url,
        model = %config.model,
        "completion provider ready"
    );
    Ok(Orchestrator::new(
        Arc::from(provider),
        config,
        strategy,
        random_source(cli.seed),
    ))
}

fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            CommandError::ExecutionFailed(format!("Failed to create async runtime: {e}")).into()
        })
}

fn cmd_ask<R: BufRead, W: Write>(
    cli: &Cli,
    question: Option<String>,
    strategy: SizingStrategy,
    format: OutputFormat,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    let mut orchestrator = build_orchestrator(cli, strategy)?;
    let rt = runtime()?;
    run_session(&mut orchestrator, &rt, question, format, input, output)
}

/// Runs an interactive session: discuss, show the summary, offer a
/// follow-up.
///
/// Only an answer of `yes` (any case, surrounding whitespace ignored)
/// continues; anything else, including end of input, ends the session.
///
/// # Errors
///
/// Fails on the first discussion failure or terminal I/O error.
pub fn run_session<R: BufRead, W: Write>(
    orchestrator: &mut Orchestrator,
    rt: &Runtime,
    question: Option<String>,
    format: OutputFormat,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    let mut question = match question {
        Some(q) => q,
        None => match prompt_line(input, output, QUESTION_PROMPT)? {
            Some(q) => q,
            None => return Ok(format!("{SESSION_END}\n")),
        },
    };

    loop {
        let discussion = rt
            .block_on(orchestrator.discuss_until_satisfied(&question))
            .map_err(|e| CommandError::ExecutionFailed(format!("Discussion failed: {e}")))?;
        write_terminal(output, &format_discussion(&discussion, format)?)?;

        let wants_more = prompt_line(input, output, FOLLOW_UP_PROMPT)?
            .is_some_and(|answer| answer.trim().to_lowercase() == "yes");
        if !wants_more {
            break;
        }

        match prompt_line(input, output, FOLLOW_UP_QUESTION_PROMPT)? {
            Some(next) => question = next,
            None => break,
        }
    }

    Ok(format!("{SESSION_END}\n"))
}

/// Writes `prompt`, then reads one line. Returns `None` at end of input.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write_terminal(output, prompt)?;
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| CommandError::ExecutionFailed(format!("Failed to read input: {e}")))?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn write_terminal<W: Write>(output: &mut W, text: &str) -> Result<()> {
    output
        .write_all(text.as_bytes())
        .and_then(|()| output.flush())
        .map_err(|e| CommandError::ExecutionFailed(format!("Failed to write output: {e}")).into())
}

fn cmd_batch(
    cli: &Cli,
    input: &Path,
    output: &Path,
    strategy: SizingStrategy,
    format: OutputFormat,
) -> Result<String> {
    let batch = read_questions(input)?;
    if batch.skipped > 0 {
        warn!(
            skipped = batch.skipped,
            "skipped malformed or question-less lines in {}",
            input.display()
        );
    }
    info!(
        questions = batch.questions.len(),
        "loaded questions from {}",
        input.display()
    );

    let mut orchestrator = build_orchestrator(cli, strategy)?;
    let mut sink = AnswerSink::create(output)?;
    let rt = runtime()?;

    let report = rt
        .block_on(orchestrator.answer_batch(&batch.questions, &mut sink))
        .map_err(|e| {
            CommandError::ExecutionFailed(format!(
                "Batch stopped after {} answers: {e}",
                sink.written()
            ))
        })?;

    let summary = BatchSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        questions: batch.questions.len(),
        skipped: batch.skipped,
        processed: report.processed,
        unanswered: report.unanswered,
    };
    Ok(format_batch_summary(&summary, format)?)
}

fn cmd_classify(
    cli: &Cli,
    question: &str,
    strategy: SizingStrategy,
    format: OutputFormat,
) -> Result<String> {
    if question.trim().is_empty() {
        return Err(CommandError::InvalidArgument("question cannot be empty".to_string()).into());
    }
    let mut rng = random_source(cli.seed);
    let plan = strategy.plan(question, rng.as_mut());
    Ok(format_plan(&plan, format)?)
}
