//! Numeric answer extraction from summaries.

use std::sync::LazyLock;

use regex::Regex;

/// Returned when a summary contains no number.
pub const NO_NUMERIC_ANSWER: &str = "No numerical answer found";

/// First standalone integer or decimal.
static NUMBER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\b\d+(?:\.\d+)?\b").ok());

/// Returns the first integer or decimal in `summary`, or [`NO_NUMERIC_ANSWER`].
#[must_use]
pub fn extract_numeric_answer(summary: &str) -> String {
    NUMBER
        .as_ref()
        .and_then(|re| re.find(summary))
        .map_or_else(|| NO_NUMERIC_ANSWER.to_string(), |m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("The answer is 42.5 apples" => "42.5"; "decimal")]
    #[test_case("She sold 72 clips in total." => "72"; "integer")]
    #[test_case("Between 3 and 7, pick 3" => "3"; "first match wins")]
    #[test_case("Total: 18.\nDone" => "18"; "trailing period is not a decimal")]
    #[test_case("no digits here" => NO_NUMERIC_ANSWER; "sentinel")]
    #[test_case("" => NO_NUMERIC_ANSWER; "empty summary")]
    #[test_case("model v2 said 5" => "5"; "digits glued to letters are skipped")]
    fn test_extract(summary: &str) -> String {
        extract_numeric_answer(summary)
    }
}
