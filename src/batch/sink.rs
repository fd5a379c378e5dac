//! Answer collection for batch runs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::BatchError;

/// Receives one answer per processed question.
pub trait AnswerCollector {
    /// Records an answer.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError`] if the answer cannot be stored.
    fn record(&mut self, answer: &str) -> Result<(), BatchError>;
}

impl AnswerCollector for Vec<String> {
    fn record(&mut self, answer: &str) -> Result<(), BatchError> {
        self.push(answer.to_string());
        Ok(())
    }
}

/// Plain-text answer file, one answer per line.
///
/// The file is truncated when the sink is created; every answer is flushed
/// as soon as it is recorded, so a failed run keeps the answers written so far.
#[derive(Debug)]
pub struct AnswerSink {
    path: PathBuf,
    writer: BufWriter<File>,
    written: usize,
}

impl AnswerSink {
    /// Creates or truncates the answer file.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Io`] if the file cannot be created.
    pub fn create(path: &Path) -> Result<Self, BatchError> {
        let file = File::create(path).map_err(|source| BatchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            written: 0,
        })
    }

    /// Path of the answer file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of answers written.
    #[must_use]
    pub const fn written(&self) -> usize {
        self.written
    }
}

impl AnswerCollector for AnswerSink {
    fn record(&mut self, answer: &str) -> Result<(), BatchError> {
        writeln!(self.writer, "{answer}")
            .and_then(|()| self.writer.flush())
            .map_err(|source| BatchError::Io {
                path: self.path.clone(),
                source,
            })?;
        self.written += 1;
        Ok(())
    }
}
