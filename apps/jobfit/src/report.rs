//! TXT and JSON report serialization for the CLI.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::matching::scoring::MatchResult;

pub fn write_txt_report(result: &MatchResult, out_path: &Path) -> Result<()> {
    ensure_parent_dir(out_path)?;
    fs::write(out_path, render_txt_report(result))
        .with_context(|| format!("failed to write TXT report to {}", out_path.display()))
}

pub fn write_json_report(result: &MatchResult, out_path: &Path) -> Result<()> {
    ensure_parent_dir(out_path)?;
    let json = serde_json::to_string_pretty(result).context("failed to serialize match result")?;
    fs::write(out_path, json)
        .with_context(|| format!("failed to write JSON report to {}", out_path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create report directory {}", parent.display()))?;
        }
    }
    Ok(())
}

fn render_txt_report(result: &MatchResult) -> String {
    let mut out = String::new();

    out.push_str("JOBFIT REPORT\n");
    out.push_str("=================\n");
    out.push_str(&format!("Match Score: {:.1}%\n", result.score));
    out.push_str(&format!(
        "Matched Weight: {} / {}\n",
        result.matched_weight, result.total_weight
    ));

    if let Some(role) = &result.role {
        out.push_str(&format!("\nRole: {role}\n"));
    }

    if let Some(summary) = &result.tailored_summary {
        out.push_str("\nTailored Summary:\n");
        for line in summary {
            out.push_str(&format!("- {line}\n"));
        }
    }

    out.push_str("\nKeyword Suggestions:\n");
    match result.keyword_suggestions.as_deref() {
        Some(keywords) if !keywords.is_empty() => {
            for kw in keywords {
                out.push_str(&format!("- {kw}\n"));
            }
        }
        _ => out.push_str("- (No core/important keywords missing)\n"),
    }

    out.push_str(&format!(
        "\nMatched Skills ({}):\n",
        result.matched_skills.len()
    ));
    for skill in &result.matched_skills {
        out.push_str(&format!("- {skill}\n"));
    }

    out.push_str(&format!(
        "\nMissing Skills ({}):\n",
        result.missing_skills.len()
    ));
    for skill in &result.missing_skills {
        out.push_str(&format!("- {skill}\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::scoring::match_resume_to_jd;
    use crate::matching::vocabulary::SkillVocabulary;

    fn sample_result() -> MatchResult {
        let vocab = SkillVocabulary::builtin();
        let mut result = match_resume_to_jd(
            "python developer",
            "python and git needed",
            &vocab,
        );
        result.role = Some("Backend Developer".to_string());
        result.tailored_summary = Some(vec!["line one".to_string()]);
        result.keyword_suggestions = Some(vec!["git".to_string()]);
        result
    }

    #[test]
    fn test_txt_report_contains_all_sections() {
        let txt = render_txt_report(&sample_result());
        assert!(txt.starts_with("JOBFIT REPORT\n"));
        assert!(txt.contains("Match Score: 60.0%"));
        assert!(txt.contains("Matched Weight: 3 / 5"));
        assert!(txt.contains("Role: Backend Developer"));
        assert!(txt.contains("Tailored Summary:"));
        assert!(txt.contains("- git"));
        assert!(txt.contains("Matched Skills (1):"));
        assert!(txt.contains("Missing Skills (1):"));
        assert!(txt.contains("- python"));
    }

    #[test]
    fn test_txt_report_placeholder_when_no_keywords() {
        let mut result = sample_result();
        result.keyword_suggestions = Some(vec![]);
        let txt = render_txt_report(&result);
        assert!(txt.contains("- (No core/important keywords missing)"));
    }

    #[test]
    fn test_reports_written_into_created_directory() {
        let dir = tempfile::tempdir().unwrap();
        let txt_path = dir.path().join("nested/jobfit_report.txt");
        let json_path = dir.path().join("nested/jobfit_report.json");
        let result = sample_result();

        write_txt_report(&result, &txt_path).unwrap();
        write_json_report(&result, &json_path).unwrap();

        let txt = fs::read_to_string(&txt_path).unwrap();
        assert!(txt.contains("JOBFIT REPORT"));

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(json["score"], 60.0);
        assert_eq!(json["role"], "Backend Developer");
        assert_eq!(json["missing_by_category"]["important"][0], "git");
    }
}
