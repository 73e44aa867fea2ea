//! Skill extraction: scans normalized text for vocabulary terms and returns
//! the set of canonical skills present.

use std::collections::HashSet;

use crate::matching::vocabulary::{SkillVocabulary, TermPattern};

/// Returns the canonical skills detected in `text`.
///
/// The input is lowercased internally, so detection is case-insensitive
/// regardless of what the caller passes. Matched terms resolve through the
/// alias table, so aliased variants ("ml", "machine learning") collapse to a
/// single entry in the result set. Empty text or an empty vocabulary yields
/// an empty set.
pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary) -> HashSet<String> {
    let text = text.to_lowercase();
    let mut skills = HashSet::new();

    for skill_term in vocabulary.terms() {
        let found = match &skill_term.pattern {
            TermPattern::Substring => text.contains(&skill_term.term),
            TermPattern::WordBounded(re) => re.is_match(&text),
        };
        if found {
            skills.insert(vocabulary.canonical(&skill_term.term).to_string());
        }
    }

    skills
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_is_case_insensitive() {
        let vocab = SkillVocabulary::builtin();
        let lower = extract_skills("experience with python", &vocab);
        let upper = extract_skills("experience with PYTHON", &vocab);
        let mixed = extract_skills("experience with Python", &vocab);
        assert!(lower.contains("python"));
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
    }

    #[test]
    fn test_word_boundary_prevents_partial_match() {
        let vocab = SkillVocabulary::builtin();
        // "r" must not match inside "framework"
        let skills = extract_skills("framework developer", &vocab);
        assert!(!skills.contains("r"));

        let skills = extract_skills("skills: r, python", &vocab);
        assert!(skills.contains("r"));
        assert!(skills.contains("python"));
    }

    #[test]
    fn test_special_term_matches_by_substring() {
        let vocab = SkillVocabulary::builtin();
        let skills = extract_skills("experience in c++ and java", &vocab);
        assert!(skills.contains("c++"));
        assert!(skills.contains("java"));
    }

    #[test]
    fn test_aliases_collapse_to_one_canonical_skill() {
        let vocab = SkillVocabulary::builtin();
        let skills = extract_skills("ml and machine learning projects", &vocab);
        assert!(skills.contains("machine learning"));
        assert!(!skills.contains("ml"));
        assert_eq!(
            skills
                .iter()
                .filter(|s| s.as_str() == "machine learning")
                .count(),
            1
        );
    }

    #[test]
    fn test_mysql_and_sql_collapse_to_sql() {
        let vocab = SkillVocabulary::builtin();
        let skills = extract_skills("mysql and sql tuning", &vocab);
        assert!(skills.contains("sql"));
        assert!(!skills.contains("mysql"));
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        let vocab = SkillVocabulary::builtin();
        assert!(extract_skills("", &vocab).is_empty());
    }

    #[test]
    fn test_empty_vocabulary_yields_empty_set() {
        let vocab = SkillVocabulary::from_tables(&[], &[], &[], &[]);
        assert!(extract_skills("python and java everywhere", &vocab).is_empty());
    }

    #[test]
    fn test_term_at_text_edges_matches() {
        let vocab = SkillVocabulary::builtin();
        let skills = extract_skills("python is listed first and last comes c", &vocab);
        assert!(skills.contains("python"));
        assert!(skills.contains("c"));
    }
}
