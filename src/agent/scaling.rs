//! Panel sizing for a discussion round.
//!
//! Decides how many agents to spawn and which roles they play. The
//! [`SizingStrategy`] bundles a difficulty classifier, an agent-count
//! policy and a role assignment so each sizing policy stays
//! internally consistent.
//!
//! # Agent Count
//!
//! | Tier      | Keyword increment | Length count |
//! |-----------|-------------------|--------------|
//! | very easy | 0                 | 2*           |
//! | easy      | 0–1               | 2            |
//! | medium    | 1–2               | 3            |
//! | hard      | 2–3               | 5            |
//! | very hard | 3–5               | 5*           |
//!
//! The keyword count is `subject areas + increment`, with the increment
//! drawn uniformly from the closed interval. The length count is fixed.
//!
//! *The length classifier never produces the outer tiers; they map to the
//! nearest fixed count.

use std::str::FromStr;

use serde::Serialize;

use super::difficulty::{Difficulty, DifficultyClassifier, KeywordClassifier, LengthClassifier};
use super::random::RandomSource;
use super::subject::{GENERALIST, identify_subjects};

/// Closed interval of extra agents added on top of the subject count.
#[must_use]
pub const fn increment_range(difficulty: Difficulty) -> (usize, usize) {
    match difficulty {
        Difficulty::VeryEasy => (0, 0),
        Difficulty::Easy => (0, 1),
        Difficulty::Medium => (1, 2),
        Difficulty::Hard => (2, 3),
        Difficulty::VeryHard => (3, 5),
    }
}

/// Keyword policy: one agent per subject area plus a tier-dependent increment.
pub fn keyword_agent_count(
    difficulty: Difficulty,
    subject_count: usize,
    rng: &mut dyn RandomSource,
) -> usize {
    let (low, high) = increment_range(difficulty);
    subject_count + rng.pick_inclusive(low, high)
}

/// Length policy: a fixed count per tier.
#[must_use]
pub const fn length_agent_count(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::VeryEasy | Difficulty::Easy => 2,
        Difficulty::Medium => 3,
        Difficulty::Hard | Difficulty::VeryHard => 5,
    }
}

/// How a question is turned into a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizingStrategy {
    /// Keyword tiers, subject areas and randomised increments.
    Keyword,
    /// Character-length tiers and fixed counts with numbered roles.
    Length,
}

impl SizingStrategy {
    /// Parses a strategy name (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "keyword" | "keywords" => Some(Self::Keyword),
            "length" => Some(Self::Length),
            _ => None,
        }
    }

    /// Returns the strategy name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Length => "length",
        }
    }

    /// Classifies the question's difficulty.
    #[must_use]
    pub fn classify(&self, question: &str) -> Difficulty {
        match self {
            Self::Keyword => KeywordClassifier.classify(question),
            Self::Length => LengthClassifier.classify(question),
        }
    }

    /// Subject areas for the question; empty under the length strategy.
    #[must_use]
    pub fn subjects(&self, question: &str) -> Vec<String> {
        match self {
            Self::Keyword => identify_subjects(question),
            Self::Length => Vec::new(),
        }
    }

    /// Decides how many agents the panel needs.
    pub fn agent_count(
        &self,
        difficulty: Difficulty,
        subjects: &[String],
        rng: &mut dyn RandomSource,
    ) -> usize {
        match self {
            Self::Keyword => keyword_agent_count(difficulty, subjects.len(), rng),
            Self::Length => length_agent_count(difficulty),
        }
    }

    /// Assigns a role to each of `count` agents.
    ///
    /// Keyword panels take the subject areas first and pad with
    /// [`GENERALIST`]; length panels are numbered `Agent 1 … Agent N`.
    #[must_use]
    pub fn roles(&self, count: usize, subjects: &[String]) -> Vec<String> {
        match self {
            Self::Keyword => subjects
                .iter()
                .cloned()
                .chain(std::iter::repeat(GENERALIST.to_string()))
                .take(count.max(subjects.len()))
                .collect(),
            Self::Length => (1..=count).map(|i| format!("Agent {i}")).collect(),
        }
    }

    /// How an agent is addressed in its priming prompt.
    #[must_use]
    pub fn role_phrase(&self, role: &str) -> String {
        match self {
            Self::Keyword => format!("a {role}"),
            Self::Length => role.to_string(),
        }
    }

    /// Runs classification and sizing for a question.
    pub fn plan(&self, question: &str, rng: &mut dyn RandomSource) -> PanelPlan {
        let difficulty = self.classify(question);
        let subjects = self.subjects(question);
        let agent_count = self.agent_count(difficulty, &subjects, rng);
        let roles = self.roles(agent_count, &subjects);
        PanelPlan {
            strategy: *self,
            difficulty,
            subjects,
            roles,
        }
    }
}

impl FromStr for SizingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown sizing strategy '{s}' (keyword, length)"))
    }
}

impl std::fmt::Display for SizingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classification and sizing for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelPlan {
    /// Strategy that produced the plan.
    pub strategy: SizingStrategy,
    /// Classified difficulty.
    pub difficulty: Difficulty,
    /// Identified subject areas (keyword strategy only).
    pub subjects: Vec<String>,
    /// One role per agent to spawn.
    pub roles: Vec<String>,
}

impl PanelPlan {
    /// Number of agents to spawn.
    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.roles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::random::StdRandom;
    use proptest::prelude::*;

    /// Always draws the upper bound and never flips heads.
    struct MaxRandom;

    impl RandomSource for MaxRandom {
        fn pick_inclusive(&mut self, low: usize, high: usize) -> usize {
            high.max(low)
        }

        fn coin_flip(&mut self) -> bool {
            false
        }
    }

    #[test]
    fn test_length_counts_are_fixed() {
        assert_eq!(length_agent_count(Difficulty::Easy), 2);
        assert_eq!(length_agent_count(Difficulty::Medium), 3);
        assert_eq!(length_agent_count(Difficulty::Hard), 5);
    }

    #[test]
    fn test_very_easy_adds_nothing() {
        let mut rng = MaxRandom;
        assert_eq!(keyword_agent_count(Difficulty::VeryEasy, 2, &mut rng), 2);
    }

    #[test]
    fn test_very_hard_upper_bound() {
        let mut rng = MaxRandom;
        assert_eq!(keyword_agent_count(Difficulty::VeryHard, 1, &mut rng), 6);
    }

    #[test]
    fn test_keyword_roles_pad_with_generalist() {
        let subjects = vec!["Physicist".to_string(), "Chemist".to_string()];
        let roles = SizingStrategy::Keyword.roles(4, &subjects);
        assert_eq!(roles, vec!["Physicist", "Chemist", GENERALIST, GENERALIST]);
    }

    #[test]
    fn test_length_roles_are_numbered() {
        let roles = SizingStrategy::Length.roles(3, &[]);
        assert_eq!(roles, vec!["Agent 1", "Agent 2", "Agent 3"]);
    }

    #[test]
    fn test_plan_without_triggers() {
        let plan = SizingStrategy::Keyword.plan("Where is Paris?", &mut MaxRandom);
        assert_eq!(plan.difficulty, Difficulty::Medium);
        assert_eq!(plan.subjects, vec![GENERALIST]);
        // 1 subject + medium upper increment of 2
        assert_eq!(plan.agent_count(), 3);
        assert!(plan.roles.iter().all(|r| r == GENERALIST));
    }

    #[test]
    fn test_plan_length_strategy() {
        let question = "Natalia sold clips to 48 of her friends in April. How many did she sell?";
        let plan = SizingStrategy::Length.plan(question, &mut MaxRandom);
        assert_eq!(plan.difficulty, Difficulty::Medium);
        assert!(plan.subjects.is_empty());
        assert_eq!(plan.agent_count(), 3);
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!(SizingStrategy::parse("Keyword"), Some(SizingStrategy::Keyword));
        assert_eq!(SizingStrategy::parse("length"), Some(SizingStrategy::Length));
        assert_eq!(SizingStrategy::parse("random"), None);
        assert!("bogus".parse::<SizingStrategy>().is_err());
    }

    #[test]
    fn test_role_phrase() {
        assert_eq!(SizingStrategy::Keyword.role_phrase("Chemist"), "a Chemist");
        assert_eq!(SizingStrategy::Length.role_phrase("Agent 2"), "Agent 2");
    }

    fn any_difficulty() -> impl Strategy<Value = Difficulty> {
        prop::sample::select(Difficulty::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_keyword_count_within_tier_range(
            difficulty in any_difficulty(),
            base in 1usize..8,
            seed in any::<u64>(),
        ) {
            let mut rng = StdRandom::seeded(seed);
            let count = keyword_agent_count(difficulty, base, &mut rng);
            let (_, max_increment) = increment_range(difficulty);
            prop_assert!(count >= base);
            prop_assert!(count <= base + max_increment);
        }

        #[test]
        fn prop_keyword_plan_roles_cover_subjects(question in "[a-z ]{0,80}", seed in any::<u64>()) {
            let mut rng = StdRandom::seeded(seed);
            let plan = SizingStrategy::Keyword.plan(&question, &mut rng);
            prop_assert!(plan.agent_count() >= plan.subjects.len());
            prop_assert_eq!(&plan.roles[..plan.subjects.len()], &plan.subjects[..]);
        }
    }
}
