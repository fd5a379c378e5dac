//! Line-delimited JSON question reader.
//!
//! Each line is a JSON object with a `"question"` string. Lines that are not
//! UTF-8 or not valid JSON, lack the field, or carry a non-string or empty
//! question are skipped without error.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::BatchError;

#[derive(Debug, Deserialize)]
struct QuestionRecord {
    question: Option<String>,
}

/// Questions parsed from a batch input, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBatch {
    /// Usable questions.
    pub questions: Vec<String>,
    /// Non-blank lines that were skipped.
    pub skipped: usize,
}

/// Parses questions from raw JSONL bytes.
#[must_use]
pub fn parse_questions(content: &[u8]) -> QuestionBatch {
    let mut batch = QuestionBatch::default();

    for (line_no, raw) in content.split(|&b| b == b'\n').enumerate() {
        let Ok(line) = std::str::from_utf8(raw) else {
            debug!(line = line_no + 1, "skipping line that is not UTF-8");
            batch.skipped += 1;
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<QuestionRecord>(line) {
            Ok(QuestionRecord {
                question: Some(question),
            }) if !question.is_empty() => batch.questions.push(question),
            Ok(_) => {
                debug!(line = line_no + 1, "skipping record without a question");
                batch.skipped += 1;
            }
            Err(e) => {
                debug!(line = line_no + 1, error = %e, "skipping malformed record");
                batch.skipped += 1;
            }
        }
    }

    batch
}

/// Reads and parses a JSONL question file.
///
/// # Errors
///
/// Returns [`BatchError::Io`] if the file cannot be read.
pub fn read_questions(path: &Path) -> Result<QuestionBatch, BatchError> {
    let content = std::fs::read(path).map_err(|source| BatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_questions(&content))
}
