use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

/// Which generation backend the intake form talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenerationMode {
    /// POST to `{API_BASE_URL}/api/generate`.
    #[default]
    Remote,
    /// Fixed demo content, no network.
    Demo,
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::Remote => "remote",
            GenerationMode::Demo => "demo",
        }
    }
}

impl FromStr for GenerationMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" => Ok(GenerationMode::Remote),
            "demo" => Ok(GenerationMode::Demo),
            other => Err(anyhow!(
                "GENERATION_MODE must be 'remote' or 'demo', got '{other}'"
            )),
        }
    }
}

/// Application configuration loaded from environment variables.
///
/// `api_base_url` is optional on purpose: a missing base is reported to the
/// user as a failed generation at submit time rather than refusing to start.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: Option<String>,
    pub generation_mode: GenerationMode,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let generation_mode = match std::env::var("GENERATION_MODE") {
            Ok(raw) => raw.parse()?,
            Err(_) => GenerationMode::default(),
        };

        Ok(Config {
            api_base_url: normalize_base_url(std::env::var("API_BASE_URL").ok()),
            generation_mode,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Blank values count as unset; a trailing slash is dropped so the endpoint
/// path can be appended verbatim.
fn normalize_base_url(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
}
