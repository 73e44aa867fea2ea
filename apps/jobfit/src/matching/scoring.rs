//! Weighted match scoring between a resume skill set and a JD skill set.
//!
//! `match_resume_to_jd` is the single entry point the boundary layers call.
//! It is a pure function: no I/O, no shared state, deterministic output for
//! identical inputs.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::extractor::extract_skills;
use crate::matching::vocabulary::{SkillCategory, SkillVocabulary};

/// Missing JD skills bucketed by priority category. Each bucket is sorted
/// lexicographically ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissingSkills {
    pub core: Vec<String>,
    pub important: Vec<String>,
    pub nice: Vec<String>,
}

impl MissingSkills {
    fn bucket_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Core => &mut self.core,
            SkillCategory::Important => &mut self.important,
            SkillCategory::Nice => &mut self.nice,
        }
    }
}

/// Full result of matching one resume against one job description.
///
/// Constructed once per document pair. The `role`, `tailored_summary`,
/// `keyword_suggestions`, and `warnings` fields are enrichment added by the
/// boundary layers before serialization; they stay unset inside the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: f64,
    pub resume_skills: Vec<String>,
    pub jd_skills: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub total_weight: u32,
    pub matched_weight: u32,
    pub jd_skill_count: usize,
    pub resume_skill_count: usize,
    pub missing_by_category: MissingSkills,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tailored_summary: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_suggestions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

/// Extracts skills from both normalized texts and computes the weighted
/// match score and categorized gap lists.
///
/// Score is `matched_weight / total_weight * 100`, or 0.0 when the JD yields
/// no skills (`total_weight == 0`). An empty JD skill set is a valid output
/// here; callers must treat `jd_skill_count == 0` as a rejected request
/// rather than a legitimate zero score, since the score alone cannot
/// distinguish "no overlap" from "nothing to match".
///
/// Rounding: one decimal place, half away from zero (`f64::round` on the
/// value scaled by 10). A 6.25% raw score reports as 6.3.
pub fn match_resume_to_jd(
    resume_text: &str,
    jd_text: &str,
    vocabulary: &SkillVocabulary,
) -> MatchResult {
    let resume_skills = extract_skills(resume_text, vocabulary);
    let jd_skills = extract_skills(jd_text, vocabulary);

    let matched: HashSet<&String> = resume_skills.intersection(&jd_skills).collect();
    let missing: HashSet<&String> = jd_skills.difference(&resume_skills).collect();

    let mut missing_by_category = MissingSkills::default();
    for skill in &missing {
        missing_by_category
            .bucket_mut(vocabulary.category_of(skill))
            .push((*skill).clone());
    }
    missing_by_category.core.sort();
    missing_by_category.important.sort();
    missing_by_category.nice.sort();

    let mut total_weight = 0u32;
    let mut matched_weight = 0u32;
    for skill in &jd_skills {
        let weight = vocabulary.weight_of(skill);
        total_weight += weight;
        if matched.contains(skill) {
            matched_weight += weight;
        }
    }

    let score = if total_weight > 0 {
        round_to_tenth(matched_weight as f64 / total_weight as f64 * 100.0)
    } else {
        0.0
    };

    MatchResult {
        score,
        resume_skills: sorted(&resume_skills),
        jd_skills: sorted(&jd_skills),
        matched_skills: sorted_refs(&matched),
        missing_skills: sorted_refs(&missing),
        total_weight,
        matched_weight,
        jd_skill_count: jd_skills.len(),
        resume_skill_count: resume_skills.len(),
        missing_by_category,
        role: None,
        tailored_summary: None,
        keyword_suggestions: None,
        warnings: None,
    }
}

/// Rounds half away from zero at one decimal place.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn sorted(skills: &HashSet<String>) -> Vec<String> {
    let mut v: Vec<String> = skills.iter().cloned().collect();
    v.sort();
    v
}

fn sorted_refs(skills: &HashSet<&String>) -> Vec<String> {
    let mut v: Vec<String> = skills.iter().map(|s| (*s).clone()).collect();
    v.sort();
    v
}
