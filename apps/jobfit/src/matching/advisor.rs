//! Role inference and tailored-summary generation from a match result.
//!
//! All lookups are substring containment over lowercased JD text; no LLM
//! calls, fully deterministic.

use std::collections::HashSet;

use crate::matching::scoring::MissingSkills;

/// Indicator groups checked in a fixed priority order. The order is a
/// deliberate tie-break: a JD mentioning both "react" and "api" resolves to
/// backend because backend is checked first.
const BACKEND_INDICATORS: &[&str] = &[
    "backend",
    "api",
    "rest",
    "microservices",
    "server",
    "django",
    "flask",
];

const DATA_ANALYST_INDICATORS: &[&str] = &[
    "data analyst",
    "dashboard",
    "excel",
    "reporting",
    "power bi",
    "tableau",
];

const ML_INDICATORS: &[&str] = &[
    "machine learning",
    "ml",
    "nlp",
    "model",
    "deep learning",
    "pytorch",
    "transformers",
];

const FRONTEND_INDICATORS: &[&str] = &["frontend", "react", "ui", "javascript", "html", "css"];

/// Office-tool skills excluded when picking "strong" skills to name in the
/// summary.
const OFFICE_TOOL_SKILLS: &[&str] = &["ms word", "ms excel", "powerpoint"];

/// Fallback phrases used when no skills matched at all.
const GENERIC_STRENGTHS: &[&str] = &["problem solving", "programming fundamentals"];

/// Infers a coarse role label from JD text.
///
/// The first indicator group with any substring hit wins; "Software
/// Engineer" when nothing hits.
pub fn infer_role(jd_text: &str) -> &'static str {
    let text = jd_text.to_lowercase();

    let hit = |keys: &[&str]| keys.iter().any(|k| text.contains(k));

    if hit(BACKEND_INDICATORS) {
        "Backend Developer"
    } else if hit(DATA_ANALYST_INDICATORS) {
        "Data Analyst"
    } else if hit(ML_INDICATORS) {
        "AI/ML Engineer"
    } else if hit(FRONTEND_INDICATORS) {
        "Frontend Developer"
    } else {
        "Software Engineer"
    }
}

/// Builds exactly three fixed-template summary lines for the inferred role.
///
/// Skill selection: up to 3 matched skills that are not office tools; when
/// fewer than 3 such skills exist, the first 3 matched skills overall
/// (office tools included); when nothing matched, two fixed generic phrases.
pub fn generate_summary(
    role: &str,
    matched_skills: &[String],
    _missing_by_category: &MissingSkills,
) -> Vec<String> {
    let strong: Vec<&str> = matched_skills
        .iter()
        .map(String::as_str)
        .filter(|s| !OFFICE_TOOL_SKILLS.contains(s))
        .collect();

    let top: Vec<&str> = if strong.len() >= 3 {
        strong[..3].to_vec()
    } else {
        matched_skills
            .iter()
            .map(String::as_str)
            .take(3)
            .collect()
    };

    let top = if top.is_empty() {
        GENERIC_STRENGTHS.to_vec()
    } else {
        top
    };

    let skills_text = top.join(", ");

    vec![
        format!(
            "Entry-level {role} with strong fundamentals and hands-on projects using {skills_text}."
        ),
        "Built practical applications involving data processing, automation, \
         and structured skill-matching workflows."
            .to_string(),
        "Seeking an entry-level opportunity to contribute, learn fast, and grow \
         in a collaborative engineering team."
            .to_string(),
    ]
}

/// Prioritized keyword suggestions: all missing core skills, then all missing
/// important skills, deduplicated preserving that order, capped at 8. The
/// nice-to-have bucket is deliberately excluded.
pub fn suggest_keywords(missing_by_category: &MissingSkills) -> Vec<String> {
    let mut seen = HashSet::new();
    missing_by_category
        .core
        .iter()
        .chain(missing_by_category.important.iter())
        .filter(|s| seen.insert(s.as_str()))
        .take(8)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_backend_wins_tie_break_over_frontend() {
        let role = infer_role("We use React on a REST API with server-side rendering");
        assert_eq!(role, "Backend Developer");
    }

    #[test]
    fn test_frontend_only_jd_infers_frontend() {
        let role = infer_role("Looking for a frontend wizard comfortable with CSS");
        assert_eq!(role, "Frontend Developer");
    }

    #[test]
    fn test_ml_jd_infers_ml_engineer() {
        let role = infer_role("Deep learning role building PyTorch pipelines");
        assert_eq!(role, "AI/ML Engineer");
    }

    #[test]
    fn test_data_analyst_jd() {
        let role = infer_role("Build Tableau dashboards and weekly reporting");
        assert_eq!(role, "Data Analyst");
    }

    #[test]
    fn test_unmatched_jd_defaults_to_software_engineer() {
        let role = infer_role("We value kindness and punctuality");
        assert_eq!(role, "Software Engineer");
    }

    #[test]
    fn test_summary_is_three_lines_naming_top_skills() {
        let matched = strings(&["git", "pandas", "python", "sql"]);
        let lines = generate_summary("Backend Developer", &matched, &MissingSkills::default());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Backend Developer"));
        assert!(lines[0].contains("git, pandas, python"));
        assert!(!lines[0].contains("sql"));
    }

    #[test]
    fn test_summary_skips_office_tools_when_enough_strong_skills() {
        let matched = strings(&["ms excel", "ms word", "pandas", "python", "sql"]);
        let lines = generate_summary("Data Analyst", &matched, &MissingSkills::default());
        assert!(lines[0].contains("pandas, python, sql"));
        assert!(!lines[0].contains("ms excel"));
    }

    #[test]
    fn test_summary_falls_back_to_matched_when_few_strong() {
        // only two non-office skills: fall back to the first 3 matched
        // overall, office tools included
        let matched = strings(&["ms excel", "powerpoint", "python", "sql"]);
        let lines = generate_summary("Data Analyst", &matched, &MissingSkills::default());
        assert!(lines[0].contains("ms excel, powerpoint, python"));
    }

    #[test]
    fn test_summary_generic_phrases_when_nothing_matched() {
        let lines = generate_summary("Software Engineer", &[], &MissingSkills::default());
        assert!(lines[0].contains("problem solving, programming fundamentals"));
    }

    #[test]
    fn test_keyword_suggestions_order_core_then_important() {
        let missing = MissingSkills {
            core: strings(&["python"]),
            important: strings(&["git", "pandas"]),
            nice: strings(&["postman"]),
        };
        let keywords = suggest_keywords(&missing);
        assert_eq!(keywords, strings(&["python", "git", "pandas"]));
    }

    #[test]
    fn test_keyword_suggestions_dedup_and_cap_at_eight() {
        let missing = MissingSkills {
            core: strings(&["a", "b", "c", "d", "e"]),
            important: strings(&["a", "f", "g", "h", "i", "j"]),
            nice: vec![],
        };
        let keywords = suggest_keywords(&missing);
        assert_eq!(keywords, strings(&["a", "b", "c", "d", "e", "f", "g", "h"]));
    }

    #[test]
    fn test_keyword_suggestions_empty_when_only_nice_missing() {
        let missing = MissingSkills {
            core: vec![],
            important: vec![],
            nice: strings(&["postman"]),
        };
        assert!(suggest_keywords(&missing).is_empty());
    }
}
