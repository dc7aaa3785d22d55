use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The LLM key is optional: without it the service runs the deterministic
/// fitter only, with no remote advisor and no emphasis annotation.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub anthropic_api_key: Option<String>,
    /// Overall deadline for one remote advisor attempt, in seconds.
    pub advisor_timeout_secs: u64,
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
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            advisor_timeout_secs: std::env::var("ADVISOR_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u64>()
                .context("ADVISOR_TIMEOUT_SECS must be a number of seconds")?,
        })
    }
}
