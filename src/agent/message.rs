//! Provider-agnostic request and response types for text completion.
//!
//! The wire format is the legacy single-prompt completion call: a model,
//! a prompt string and a token budget in; a list of choices out.

use serde::{Deserialize, Serialize};

/// Finish reason a server reports when generation ended naturally.
pub const STOP_FINISH_REASON: &str = "stop";

/// A text completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model identifier (e.g., "ollama/llama3.2:latest").
    pub model: String,
    /// Full prompt text.
    pub prompt: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(model: impl Into<String>, prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            max_tokens,
        }
    }
}

/// The first choice of a completion response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Generated text, whitespace-trimmed.
    pub text: String,
    /// Why the model stopped generating (e.g. `"stop"`, `"length"`).
    pub finish_reason: Option<String>,
}

impl Completion {
    /// Returns `true` when the server signalled a natural stop.
    #[must_use]
    pub fn is_stop(&self) -> bool {
        self.finish_reason.as_deref() == Some(STOP_FINISH_REASON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = CompletionRequest::new("ollama/llama3.2:latest", "hello", 300);
        let json = serde_json::to_value(&request).unwrap_or_default();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "ollama/llama3.2:latest",
                "prompt": "hello",
                "max_tokens": 300
            })
        );
    }

    #[test]
    fn test_is_stop() {
        let mut completion = Completion {
            text: "done".to_string(),
            finish_reason: Some("stop".to_string()),
        };
        assert!(completion.is_stop());

        completion.finish_reason = Some("length".to_string());
        assert!(!completion.is_stop());

        completion.finish_reason = None;
        assert!(!completion.is_stop());
    }
}
