use anyhow::{Context, Result};

/// Default transcription endpoint (OpenAI-compatible audio API).
const DEFAULT_TRANSCRIPTION_URL: &str = "https://api.groq.com/openai/v1/audio/transcriptions";

/// Application configuration loaded from environment variables.
/// Startup fails fast if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub transcription_api_key: String,
    pub transcription_url: String,
    /// Interviewer question budget per session. Fixed at session creation.
    pub max_questions: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            transcription_api_key: require_env("TRANSCRIPTION_API_KEY")?,
            transcription_url: std::env::var("TRANSCRIPTION_URL")
                .unwrap_or_else(|_| DEFAULT_TRANSCRIPTION_URL.to_string()),
            max_questions: std::env::var("MAX_QUESTIONS")
                .unwrap_or_else(|_| "15".to_string())
                .parse::<u32>()
                .context("MAX_QUESTIONS must be a non-negative integer")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
