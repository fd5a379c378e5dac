//! Output formatting for CLI commands.

use std::fmt::Write;
use std::path::PathBuf;

use serde::Serialize;

use crate::agent::{Discussion, PanelPlan};
use crate::error::CommandError;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Parses a format name; unknown names fall back to text.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Totals reported after a batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// Question file.
    pub input: PathBuf,
    /// Answer file.
    pub output: PathBuf,
    /// Usable questions read.
    pub questions: usize,
    /// Lines skipped as malformed or missing a question.
    pub skipped: usize,
    /// Questions discussed.
    pub processed: usize,
    /// Questions whose summary held no number.
    pub unanswered: usize,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, CommandError> {
    serde_json::to_string_pretty(value)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| CommandError::OutputFormat(format!("JSON serialization failed: {e}")))
}

/// Formats a panel plan.
pub fn format_plan(plan: &PanelPlan, format: OutputFormat) -> Result<String, CommandError> {
    match format {
        OutputFormat::Json => to_json(plan),
        OutputFormat::Text => {
            let mut out = String::new();
            let _ = writeln!(out, "Strategy:   {}", plan.strategy);
            let _ = writeln!(out, "Difficulty: {}", plan.difficulty);
            if !plan.subjects.is_empty() {
                let _ = writeln!(out, "Subjects:   {}", plan.subjects.join(", "));
            }
            let _ = writeln!(out, "Agents:     {}", plan.agent_count());
            for (i, role) in plan.roles.iter().enumerate() {
                let _ = writeln!(out, "  Agent_{:<3} {role}", i + 1);
            }
            Ok(out)
        }
    }
}

/// Formats the accepted summary of an interactive discussion.
pub fn format_discussion(
    discussion: &Discussion,
    format: OutputFormat,
) -> Result<String, CommandError> {
    match format {
        OutputFormat::Json => to_json(discussion),
        OutputFormat::Text => Ok(format!(
            "\nFinal Summary from Organizer:\n{}\n\n---\nDifficulty: {} | Agents: {} | Rounds: {} | Time: {:.1}s\n",
            discussion.last_round.summary,
            discussion.plan.difficulty,
            discussion.plan.agent_count(),
            discussion.rounds,
            discussion.elapsed.as_secs_f64()
        )),
    }
}

/// Formats batch totals.
pub fn format_batch_summary(
    summary: &BatchSummary,
    format: OutputFormat,
) -> Result<String, CommandError> {
    match format {
        OutputFormat::Json => to_json(summary),
        OutputFormat::Text => {
            let skipped_hint = if summary.skipped > 0 {
                format!(" ({} skipped)", summary.skipped)
            } else {
                String::new()
            };
            Ok(format!(
                "Processed {}/{} questions{skipped_hint} | No numeric answer: {}\nAnswers written to {}\n",
                summary.processed,
                summary.questions,
                summary.unanswered,
                summary.output.display()
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{Difficulty, SizingStrategy};

    fn plan() -> PanelPlan {
        PanelPlan {
            strategy: SizingStrategy::Keyword,
            difficulty: Difficulty::Hard,
            subjects: vec!["Mathematician".to_string()],
            roles: vec!["Mathematician".to_string(), "Generalist".to_string()],
        }
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("yaml"), OutputFormat::Text);
    }

    #[test]
    fn test_format_plan_text() {
        let out = format_plan(&plan(), OutputFormat::Text).unwrap_or_default();
        assert!(out.contains("Difficulty: hard"));
        assert!(out.contains("Subjects:   Mathematician"));
        assert!(out.contains("Agents:     2"));
        assert!(out.contains("Generalist"));
    }

    #[test]
    fn test_format_plan_json() {
        let out = format_plan(&plan(), OutputFormat::Json).unwrap_or_default();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap_or_default();
        assert_eq!(value["difficulty"], "hard");
        assert_eq!(value["strategy"], "keyword");
        assert_eq!(value["roles"][1], "Generalist");
    }

    #[test]
    fn test_format_batch_summary_text() {
        let summary = BatchSummary {
            input: PathBuf::from("test.jsonl"),
            output: PathBuf::from("result.txt"),
            questions: 2,
            skipped: 1,
            processed: 2,
            unanswered: 0,
        };
        let out = format_batch_summary(&summary, OutputFormat::Text).unwrap_or_default();
        assert!(out.starts_with("Processed 2/2 questions (1 skipped)"));
        assert!(out.contains("result.txt"));
    }
}
