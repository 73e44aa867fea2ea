//! Axum route handler for the analyze endpoint.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;

use crate::errors::AppError;
use crate::matching::advisor::{generate_summary, infer_role, suggest_keywords};
use crate::matching::scoring::{match_resume_to_jd, MatchResult};
use crate::state::AppState;
use crate::text::clean_text;

/// POST /analyze
///
/// Multipart form with two PDF parts, `resume` and `jd`. Runs the full
/// pipeline: extract, normalize, match, enrich with role/summary/keywords.
/// Rejects the request when the job description yields no skills, since a
/// zero score would be indistinguishable from a legitimately poor match.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchResult>, AppError> {
    let mut resume_bytes: Option<Bytes> = None;
    let mut jd_bytes: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let label = match field.name() {
            Some("resume") => "Resume",
            Some("jd") => "Job description",
            _ => continue,
        };
        ensure_pdf_content_type(label, field.content_type())?;
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read {label}: {e}")))?;
        ensure_size_within(label, data.len(), state.config.max_upload_bytes)?;
        if label == "Resume" {
            resume_bytes = Some(data);
        } else {
            jd_bytes = Some(data);
        }
    }

    let resume_bytes = resume_bytes
        .ok_or_else(|| AppError::Validation("Missing multipart part: resume".to_string()))?;
    let jd_bytes =
        jd_bytes.ok_or_else(|| AppError::Validation("Missing multipart part: jd".to_string()))?;

    let resume_text = clean_text(&state.extractor.extract(&resume_bytes)?);
    let jd_text = clean_text(&state.extractor.extract(&jd_bytes)?);

    let mut warnings = Vec::new();
    if resume_text.len() < state.config.min_text_length {
        warnings.push("Resume text seems very short. PDF may be scanned or empty.".to_string());
    }
    if jd_text.len() < state.config.min_text_length {
        warnings.push("Job description text seems very short.".to_string());
    }

    let mut result = match_resume_to_jd(&resume_text, &jd_text, &state.vocabulary);

    if result.jd_skill_count == 0 {
        return Err(AppError::NoJdSkills);
    }

    let role = infer_role(&jd_text);
    result.tailored_summary = Some(generate_summary(
        role,
        &result.matched_skills,
        &result.missing_by_category,
    ));
    result.keyword_suggestions = Some(suggest_keywords(&result.missing_by_category));
    result.role = Some(role.to_string());
    result.warnings = Some(warnings);

    tracing::info!(
        score = result.score,
        resume_skills = result.resume_skill_count,
        jd_skills = result.jd_skill_count,
        "analyze complete"
    );

    Ok(Json(result))
}

fn ensure_pdf_content_type(label: &str, content_type: Option<&str>) -> Result<(), AppError> {
    match content_type {
        Some("application/pdf") | Some("application/x-pdf") => Ok(()),
        _ => Err(AppError::Validation(format!("{label} must be a PDF file."))),
    }
}

fn ensure_size_within(label: &str, len: usize, max_bytes: usize) -> Result<(), AppError> {
    if len == 0 {
        return Err(AppError::Validation(format!("{label} is empty.")));
    }
    if len > max_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "{label} is too large. Max {}MB.",
            max_bytes / (1024 * 1024)
        )));
    }
    Ok(())
}
