//! Prompt templates for discussion rounds.
//!
//! Agents are primed with their role, then asked the bare question; the
//! organizer's summary request lists every response as `name: text`.

use std::fmt::Write;

use super::pool::DiscussionResponse;

/// Header line of the initial summary prompt.
pub const SUMMARY_HEADER: &str = "Summarize the following discussion:\n";

/// Builds the priming message sent to each agent before the discussion.
///
/// `role_phrase` is how the agent is addressed (`"a Physicist"`, `"Agent 2"`).
#[must_use]
pub fn build_intro_prompt(role_phrase: &str, question: &str) -> String {
    format!("You are {role_phrase}. Here is the question to discuss: '{question}'")
}

/// Builds the initial summary prompt from the collected responses.
#[must_use]
pub fn build_summary_prompt(responses: &[DiscussionResponse]) -> String {
    let mut prompt = String::from(SUMMARY_HEADER);
    for response in responses {
        let _ = writeln!(prompt, "{}: {}", response.agent, response.text);
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_prompt() {
        assert_eq!(
            build_intro_prompt("a Chemist", "What is rust?"),
            "You are a Chemist. Here is the question to discuss: 'What is rust?'"
        );
    }

    #[test]
    fn test_summary_prompt_lists_responses_in_order() {
        let responses = vec![
            DiscussionResponse {
                agent: "Agent_1".to_string(),
                role: "Chemist".to_string(),
                text: "Iron oxide.".to_string(),
            },
            DiscussionResponse {
                agent: "Agent_2".to_string(),
                role: "Generalist".to_string(),
                text: "Corrosion.".to_string(),
            },
        ];
        assert_eq!(
            build_summary_prompt(&responses),
            "Summarize the following discussion:\nAgent_1: Iron oxide.\nAgent_2: Corrosion.\n"
        );
    }

    #[test]
    fn test_summary_prompt_without_responses() {
        assert_eq!(build_summary_prompt(&[]), SUMMARY_HEADER);
    }
}
