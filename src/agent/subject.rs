//! Subject-area identification for the keyword sizing strategy.
//!
//! Each area carries its own trigger words; every area with a trigger in
//! the question is reported, in table order.

use super::difficulty::contains_trigger;

/// Role given to agents when no subject area matches or to pad a roster.
pub const GENERALIST: &str = "Generalist";

/// Subject areas and their trigger words, in reporting order.
pub const SUBJECT_AREAS: &[(&str, &[&str])] = &[
    (
        "Mathematician",
        &["calculate", "equation", "math", "geometry", "algebra"],
    ),
    (
        "Physicist",
        &["physics", "force", "energy", "gravity", "relativity"],
    ),
    ("Biologist", &["biology", "genetics", "evolution", "cell"]),
    ("Historian", &["history", "ancient", "war", "revolution"]),
    (
        "Chemist",
        &["chemistry", "chemical", "reaction", "molecule"],
    ),
    (
        "Economist",
        &["economics", "trade", "market", "finance", "GDP"],
    ),
    (
        "Computer Scientist",
        &["algorithm", "data", "machine learning", "computer", "AI"],
    ),
    (
        "Literary Analyst",
        &["literature", "novel", "poetry", "author", "narrative"],
    ),
    (
        "Philosopher",
        &["philosophy", "ethics", "morality", "existentialism", "thought"],
    ),
    (
        "Psychologist",
        &["psychology", "behavior", "cognition", "mind", "personality"],
    ),
    (
        "Linguist",
        &["linguistics", "language", "syntax", "semantics", "grammar"],
    ),
    (
        "Sociologist",
        &["sociology", "society", "culture", "social behavior", "class"],
    ),
    (
        "Medical Doctor",
        &["medicine", "disease", "treatment", "diagnosis", "patient"],
    ),
    ("Lawyer", &["law", "legal", "court", "justice", "rights"]),
    (
        "Environmental Scientist",
        &["environment", "climate", "pollution", "conservation", "ecosystem"],
    ),
    (
        "Engineer",
        &["engineering", "design", "mechanics", "structure", "construction"],
    ),
];

/// Returns every subject area whose triggers occur in the question.
///
/// Falls back to a single [`GENERALIST`] entry when nothing matches.
#[must_use]
pub fn identify_subjects(question: &str) -> Vec<String> {
    let lowered = question.to_lowercase();
    let mut areas: Vec<String> = SUBJECT_AREAS
        .iter()
        .filter(|(_, triggers)| {
            triggers
                .iter()
                .any(|trigger| contains_trigger(&lowered, trigger))
        })
        .map(|(area, _)| (*area).to_string())
        .collect();

    if areas.is_empty() {
        areas.push(GENERALIST.to_string());
    }
    areas
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_area() {
        assert_eq!(
            identify_subjects("How does gravity bend light?"),
            vec!["Physicist"]
        );
    }

    #[test]
    fn test_areas_follow_table_order() {
        // Mentions law before math; the table lists Mathematician first.
        let areas = identify_subjects("Is a court ruling on algebra homework legal?");
        assert_eq!(areas, vec!["Mathematician", "Lawyer"]);
    }

    #[test]
    fn test_mixed_case_triggers_match() {
        let areas = identify_subjects("How did GDP react to AI adoption?");
        assert_eq!(areas, vec!["Economist", "Computer Scientist"]);
    }

    #[test]
    fn test_no_match_is_generalist() {
        assert_eq!(identify_subjects("Where is Paris?"), vec![GENERALIST]);
        assert_eq!(identify_subjects(""), vec![GENERALIST]);
    }

    #[test]
    fn test_trigger_inside_word_matches() {
        // "war" inside "software", "law" inside "flaw"
        assert_eq!(
            identify_subjects("Any flaw in this software?"),
            vec!["Historian", "Lawyer"]
        );
        // "force" in "enforcement", "cell" in "excellent", "mind" in "remind"
        assert_eq!(
            identify_subjects("Remind me how excellent enforcement works"),
            vec!["Physicist", "Biologist", "Psychologist"]
        );
    }

    proptest! {
        #[test]
        fn prop_result_is_never_empty(question in ".{0,120}") {
            prop_assert!(!identify_subjects(&question).is_empty());
        }
    }
}
