//! PDF text extraction behind a swappable trait seam.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>` so tests can substitute a
//! fixed-text extractor without touching handler code. The default backend
//! wraps the `pdf-extract` crate; page texts arrive joined by newlines and
//! are collapsed by `text::clean_text` downstream.

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF parsing failed: {0}")]
    Parse(String),
}

/// Extracts plain text from PDF bytes. How parsing failures surface is the
/// caller's concern; the matching core never sees this boundary.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, pdf_bytes: &[u8]) -> Result<String, ExtractError>;
}

/// Default extractor backed by `pdf-extract`.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, pdf_bytes: &[u8]) -> Result<String, ExtractError> {
        pdf_extract::extract_text_from_mem(pdf_bytes)
            .map_err(|e| ExtractError::Parse(e.to_string()))
    }
}

/// Path-based variant used by the CLI.
pub fn extract_text_from_path(path: &Path) -> Result<String, ExtractError> {
    pdf_extract::extract_text(path).map_err(|e| ExtractError::Parse(e.to_string()))
}
