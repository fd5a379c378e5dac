//! Question difficulty classification.
//!
//! Two interchangeable policies: a keyword table scanned in tier order, and
//! a character-length cut. Both are pure functions of the question text.

use serde::Serialize;

/// Discrete difficulty tier, ordered from easiest to hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Difficulty {
    /// Introductory material.
    #[serde(rename = "very easy")]
    VeryEasy,
    /// Worked examples and definitions.
    #[serde(rename = "easy")]
    Easy,
    /// Analysis and application.
    #[serde(rename = "medium")]
    Medium,
    /// Proofs and mechanisms.
    #[serde(rename = "hard")]
    Hard,
    /// Frontier topics.
    #[serde(rename = "very hard")]
    VeryHard,
}

impl Difficulty {
    /// All tiers in classification order.
    pub const ALL: [Self; 5] = [
        Self::VeryEasy,
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::VeryHard,
    ];

    /// Returns the tier label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VeryEasy => "very easy",
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::VeryHard => "very hard",
        }
    }

    /// Trigger words for the keyword policy.
    #[must_use]
    pub const fn triggers(&self) -> &'static [&'static str] {
        match self {
            Self::VeryEasy => &["basic", "simple", "introduction", "overview"],
            Self::Easy => &["example", "calculate", "definition", "explain", "describe"],
            Self::Medium => &["analyze", "apply", "method", "theory", "relationship"],
            Self::Hard => &["prove", "theorem", "mechanism", "advanced", "hypothesis"],
            Self::VeryHard => &[
                "quantum",
                "relativity",
                "genomics",
                "multivariable",
                "neural network",
            ],
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a question to a [`Difficulty`].
pub trait DifficultyClassifier {
    /// Classifies the question.
    fn classify(&self, question: &str) -> Difficulty;
}

/// First tier (in [`Difficulty::ALL`] order) with a trigger in the question
/// wins; [`Difficulty::Medium`] when nothing matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl DifficultyClassifier for KeywordClassifier {
    fn classify(&self, question: &str) -> Difficulty {
        let lowered = question.to_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|tier| {
                tier.triggers()
                    .iter()
                    .any(|trigger| contains_trigger(&lowered, trigger))
            })
            .unwrap_or(Difficulty::Medium)
    }
}

/// Questions shorter than this many characters are easy.
pub const MEDIUM_MIN_CHARS: usize = 50;
/// Questions at least this many characters long are hard.
pub const HARD_MIN_CHARS: usize = 100;

/// Classifies by character count: `<50` easy, `50..100` medium, `>=100` hard.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthClassifier;

impl DifficultyClassifier for LengthClassifier {
    fn classify(&self, question: &str) -> Difficulty {
        match question.chars().count() {
            n if n < MEDIUM_MIN_CHARS => Difficulty::Easy,
            n if n < HARD_MIN_CHARS => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }
}

/// Returns `true` if `trigger` occurs anywhere in `lowered`, including
/// inside a longer word (`"war"` fires on `"software"`).
///
/// `lowered` must already be lower-cased. The trigger is lower-cased here so
/// mixed-case table entries (`"GDP"`, `"AI"`) still match.
pub(crate) fn contains_trigger(lowered: &str, trigger: &str) -> bool {
    let trigger = trigger.to_lowercase();
    !trigger.is_empty() && lowered.contains(trigger.as_str())
}
