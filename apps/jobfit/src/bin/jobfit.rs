//! JobFit CLI: match a resume PDF against a job description PDF and print a
//! weighted skill analysis, optionally saving TXT and JSON reports.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jobfit::config::Config;
use jobfit::matching::advisor::{generate_summary, infer_role, suggest_keywords};
use jobfit::matching::scoring::match_resume_to_jd;
use jobfit::matching::vocabulary::SkillVocabulary;
use jobfit::pdf::extract_text_from_path;
use jobfit::report::{write_json_report, write_txt_report};
use jobfit::text::clean_text;

#[derive(Parser)]
#[command(
    name = "jobfit",
    version,
    about = "Match a resume PDF against a job description PDF using skill extraction and weighted scoring."
)]
struct Cli {
    /// Path to the resume PDF
    #[arg(long, value_name = "PATH")]
    resume: PathBuf,

    /// Path to the job description PDF
    #[arg(long, value_name = "PATH")]
    jd: PathBuf,

    /// Output directory for reports
    #[arg(long, default_value = "reports", value_name = "DIR")]
    out: PathBuf,

    /// Do not save TXT/JSON reports
    #[arg(long)]
    no_save: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if !cli.resume.is_file() {
        bail!("resume file not found: {}", cli.resume.display());
    }
    if !cli.jd.is_file() {
        bail!("JD file not found: {}", cli.jd.display());
    }

    let resume_text = extract_text_from_path(&cli.resume)
        .with_context(|| format!("failed to read resume PDF {}", cli.resume.display()))?;
    let jd_text = extract_text_from_path(&cli.jd)
        .with_context(|| format!("failed to read JD PDF {}", cli.jd.display()))?;

    let resume_text = clean_text(&resume_text);
    let jd_text = clean_text(&jd_text);

    let min_text_length = Config::default().min_text_length;
    if resume_text.len() < min_text_length {
        println!("Warning: Resume text seems very short. PDF may be scanned or empty.");
    }
    if jd_text.len() < min_text_length {
        println!("Warning: Job description text seems very short.");
    }

    let vocabulary = SkillVocabulary::builtin();
    let mut result = match_resume_to_jd(&resume_text, &jd_text, &vocabulary);

    println!("\n===== JOBFIT ANALYSIS =====");
    println!("Resume skills detected: {}", result.resume_skill_count);
    println!("JD skills detected: {}", result.jd_skill_count);

    if result.jd_skill_count == 0 {
        println!("No skills detected in job description. Cannot compute a reliable match score.");
        return Ok(());
    }

    println!("\nMatch Score: {:.1}%", result.score);
    println!(
        "Matched Weight: {} / {}",
        result.matched_weight, result.total_weight
    );

    println!("\nMatched skills ({}):", result.matched_skills.len());
    for skill in &result.matched_skills {
        println!("- {skill}");
    }

    println!("\nMissing skills ({}):", result.missing_skills.len());
    for skill in &result.missing_skills {
        println!("- {skill}");
    }

    let missing = &result.missing_by_category;
    println!("\nMissing Skills by Priority:");
    println!("Core ({}):", missing.core.len());
    for s in &missing.core {
        println!("- {s}");
    }
    println!("\nImportant ({}):", missing.important.len());
    for s in &missing.important {
        println!("- {s}");
    }
    println!("\nNice-to-have ({}):", missing.nice.len());
    for s in &missing.nice {
        println!("- {s}");
    }

    if !missing.core.is_empty() {
        println!("\nSuggestion: Focus on adding/learning the core missing skills first.");
    } else if !missing.important.is_empty() {
        println!("\nSuggestion: Add the important skills if you have used them in projects.");
    } else {
        println!("\nSuggestion: Great match, only nice-to-have skills are missing.");
    }

    let role = infer_role(&jd_text);
    let summary_lines = generate_summary(role, &result.matched_skills, &result.missing_by_category);
    let keywords = suggest_keywords(&result.missing_by_category);

    println!("\nTailored Summary:");
    for line in &summary_lines {
        println!("- {line}");
    }

    println!("\nKeyword Suggestions:");
    if keywords.is_empty() {
        println!("- (No core/important keywords missing)");
    } else {
        for kw in &keywords {
            println!("- {kw}");
        }
    }

    result.role = Some(role.to_string());
    result.tailored_summary = Some(summary_lines);
    result.keyword_suggestions = Some(keywords);

    if cli.no_save {
        return Ok(());
    }

    let txt_path = cli.out.join("jobfit_report.txt");
    let json_path = cli.out.join("jobfit_report.json");
    write_txt_report(&result, &txt_path)?;
    write_json_report(&result, &json_path)?;

    println!("\nSaved TXT report to: {}", txt_path.display());
    println!("Saved JSON report to: {}", json_path.display());

    Ok(())
}
