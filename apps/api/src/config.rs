use anyhow::{Context, Result};

use crate::dialogue::store::DEFAULT_MAX_SESSIONS;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4";

/// Application configuration loaded from environment variables.
///
/// Nothing is strictly required: without `OPENAI_API_KEY` the guided resume
/// dialogue still works and the free-form chat endpoints answer 503.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Cap on live sessions per store (dialogue and chat each get their own).
    pub max_sessions: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        dotenvy::from_filename("apaikey.env").ok();

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_model: optional_env("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            openai_base_url: optional_env("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_sessions: match optional_env("MAX_SESSIONS") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_SESSIONS must be a non-negative integer")?,
                None => DEFAULT_MAX_SESSIONS,
            },
        })
    }
}

/// Reads `key`, treating an empty or whitespace-only value as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
