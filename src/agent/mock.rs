//! Scripted completion provider for unit tests.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::message::{Completion, CompletionRequest};
use super::provider::CompletionProvider;
use crate::error::AgentError;

enum Step {
    Reply(Completion),
    Malformed,
}

/// Replays a fixed sequence of responses and records every request.
///
/// Once the script is exhausted, answers with `fallback` (a stop response)
/// or, without one, with a malformed-response error.
pub(crate) struct ScriptedProvider {
    script: Mutex<VecDeque<Step>>,
    requests: Mutex<Vec<CompletionRequest>>,
    fallback: Option<String>,
}

impl ScriptedProvider {
    pub(crate) fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            fallback: None,
        }
    }

    /// Queues a response that signals a natural stop.
    pub(crate) fn stop(self, text: &str) -> Self {
        self.push(Step::Reply(Completion {
            text: text.to_string(),
            finish_reason: Some("stop".to_string()),
        }))
    }

    /// Queues a response cut off by the token budget.
    pub(crate) fn partial(self, text: &str) -> Self {
        self.push(Step::Reply(Completion {
            text: text.to_string(),
            finish_reason: Some("length".to_string()),
        }))
    }

    /// Queues a response without any finish reason.
    pub(crate) fn unfinished(self, text: &str) -> Self {
        self.push(Step::Reply(Completion {
            text: text.to_string(),
            finish_reason: None,
        }))
    }

    /// Queues a response missing its result field.
    pub(crate) fn malformed(self) -> Self {
        self.push(Step::Malformed)
    }

    /// Answers every unscripted call with a stop response carrying `text`.
    pub(crate) fn with_fallback(mut self, text: &str) -> Self {
        self.fallback = Some(text.to_string());
        self
    }

    fn push(self, step: Step) -> Self {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(step);
        self
    }

    /// Number of requests received so far.
    pub(crate) fn calls(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Prompts received so far, in order.
    pub(crate) fn prompts(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|r| r.prompt.clone())
            .collect()
    }

    /// Requests received so far, in order.
    pub(crate) fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, AgentError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        let step = self
            .script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();

        match step {
            Some(Step::Reply(completion)) => Ok(completion),
            Some(Step::Malformed) => Err(AgentError::MalformedResponse {
                message: "the response does not contain the expected 'choices' key".to_string(),
                body: "{}".to_string(),
            }),
            None => self.fallback.as_ref().map_or_else(
                || {
                    Err(AgentError::MalformedResponse {
                        message: "script exhausted".to_string(),
                        body: String::new(),
                    })
                },
                |text| {
                    Ok(Completion {
                        text: text.clone(),
                        finish_reason: Some("stop".to_string()),
                    })
                },
            ),
        }
    }
}
