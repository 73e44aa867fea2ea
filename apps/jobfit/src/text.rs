//! Text normalization applied to extracted PDF text before skill matching.

use once_cell::sync::Lazy;
use regex::Regex;

// Keep letters, digits, whitespace, and the punctuation skill terms carry
// ("c++", "c#", ".net").
static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s+.#]").unwrap());

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalizes raw extracted text: lowercase, newlines and tabs to spaces,
/// disallowed characters replaced by spaces, whitespace runs collapsed to a
/// single space, trimmed.
pub fn clean_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let spaced = lowered.replace(['\n', '\t'], " ");
    let stripped = DISALLOWED.replace_all(&spaced, " ");
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_collapses_whitespace() {
        assert_eq!(clean_text("  Python\n\tand   SQL  "), "python and sql");
    }

    #[test]
    fn test_strips_punctuation_to_spaces() {
        assert_eq!(clean_text("skills: python, sql!"), "skills python sql");
    }

    #[test]
    fn test_keeps_plus_dot_hash() {
        assert_eq!(clean_text("C++ and .NET and C#"), "c++ and .net and c#");
    }

    #[test]
    fn test_empty_input_stays_empty() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("\n\t \n"), "");
    }

    #[test]
    fn test_unicode_punctuation_removed() {
        assert_eq!(clean_text("résumé — skills"), "r sum skills");
    }
}
