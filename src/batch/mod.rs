//! Batch question processing support.
//!
//! Reads questions from line-delimited JSON, extracts a numeric answer from
//! each summary and collects the answers one per line.

pub mod answer;
pub mod reader;
pub mod sink;

pub use answer::{NO_NUMERIC_ANSWER, extract_numeric_answer};
pub use reader::{QuestionBatch, parse_questions, read_questions};
pub use sink::{AnswerCollector, AnswerSink};
