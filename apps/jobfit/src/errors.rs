use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::pdf::ExtractError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The matching core never constructs these; only the boundary layers do.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("PDF parsing failed: {0}")]
    PdfParse(String),

    #[error("No skills detected in job description")]
    NoJdSkills,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        AppError::PdfParse(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                msg.clone(),
            ),
            AppError::PdfParse(msg) => {
                tracing::warn!("PDF parse error: {msg}");
                (StatusCode::BAD_REQUEST, "PDF_PARSE_ERROR", msg.clone())
            }
            AppError::NoJdSkills => (
                StatusCode::BAD_REQUEST,
                "NO_JD_SKILLS",
                "No skills detected in job description. Try a clearer JD.".to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_jd_skills_maps_to_bad_request() {
        let response = AppError::NoJdSkills.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_payload_too_large_maps_to_413() {
        let response =
            AppError::PayloadTooLarge("Resume is too large. Max 8MB.".into()).into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_extract_error_converts_to_pdf_parse() {
        let err: AppError = ExtractError::Parse("bad xref".into()).into();
        assert!(matches!(err, AppError::PdfParse(_)));
    }
}
