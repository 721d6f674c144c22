use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    /// Optional achievements corpus file (blank-line separated records).
    /// Absent → retrieval reports `disabled` for every run.
    pub achievements_path: Option<String>,
    pub max_resume_chars: usize,
    pub retrieval_k: usize,
    pub port: u16,
    pub rust_log: String,
}

const DEFAULT_MAX_RESUME_CHARS: usize = 15_000;
const DEFAULT_RETRIEVAL_K: usize = 4;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            achievements_path: std::env::var("ACHIEVEMENTS_PATH").ok(),
            max_resume_chars: parse_env("MAX_RESUME_CHARS", DEFAULT_MAX_RESUME_CHARS)?,
            retrieval_k: parse_env("RETRIEVAL_K", DEFAULT_RETRIEVAL_K)?,
            port: parse_env("PORT", 8080u16)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("'{key}' must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
