use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a sensible default; `ANTHROPIC_API_KEY` is optional
/// and decides which chat assistant backend is installed at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub anthropic_api_key: Option<String>,
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
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
        })
    }
}

/// Returns the variable's value, treating unset and empty as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
