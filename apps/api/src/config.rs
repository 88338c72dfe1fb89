use std::time::Duration;

use anyhow::{Context, Result};

use crate::models::listing::Platform;

const DEFAULT_PLATFORMS: &str = "linkedin,indeed,glassdoor";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:3001,http://127.0.0.1:3000";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Per-source cap applied when a search request omits `max_results`.
    pub default_max_results: usize,
    /// Platforms queried when neither the request nor stored criteria name any.
    pub search_platforms: Vec<Platform>,
    pub source_timeout: Duration,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let search_platforms = parse_list(&optional_env("JOB_SEARCH_PLATFORMS", DEFAULT_PLATFORMS))
            .iter()
            .map(|p| {
                p.parse::<Platform>()
                    .map_err(|e| anyhow::anyhow!("JOB_SEARCH_PLATFORMS: {e}"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: optional_env("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
            default_max_results: optional_env("DEFAULT_MAX_RESULTS", "50")
                .parse::<usize>()
                .context("DEFAULT_MAX_RESULTS must be a non-negative integer")?,
            search_platforms,
            source_timeout: Duration::from_secs(
                optional_env("SOURCE_TIMEOUT_SECS", "30")
                    .parse::<u64>()
                    .context("SOURCE_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            cors_origins: parse_list(&optional_env("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Splits a comma-separated variable, trimming entries and dropping blanks.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
