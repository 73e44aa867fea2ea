use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_MB: usize = 8;
const DEFAULT_MIN_TEXT_LENGTH: usize = 100;

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare environment works out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Per-upload size cap in bytes (resume and JD each).
    pub max_upload_bytes: usize,
    /// Extracted texts shorter than this trigger a "seems very short" warning.
    pub min_text_length: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: std::env::var("MAX_UPLOAD_MB")
                .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_MB.to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_MB must be a number of megabytes")?
                * 1024
                * 1024,
            min_text_length: std::env::var("MIN_TEXT_LENGTH")
                .unwrap_or_else(|_| DEFAULT_MIN_TEXT_LENGTH.to_string())
                .parse::<usize>()
                .context("MIN_TEXT_LENGTH must be a number of characters")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
            min_text_length: DEFAULT_MIN_TEXT_LENGTH,
        }
    }
}
