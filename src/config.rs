//! Configuration types.
//!
//! Provider keys are read from the environment once at startup and carried
//! as explicit config values — the gateway clients never reach into ambient
//! process state.

use std::time::Duration;

use secrecy::SecretString;

/// Configuration for the flight-search provider (SerpApi Google Flights).
#[derive(Debug, Clone)]
pub struct FlightApiConfig {
    /// SerpApi key. `None` means flight searches fail at call time with a
    /// server error; startup proceeds regardless.
    pub api_key: Option<SecretString>,
    /// Search endpoint base URL.
    pub base_url: String,
    /// Currency for fare quotes.
    pub currency: String,
}

impl FlightApiConfig {
    /// Build from `SERPAPI_KEY` (and optional `SERPAPI_URL`, `FLIGHT_CURRENCY`).
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("SERPAPI_KEY").ok().map(SecretString::from),
            base_url: std::env::var("SERPAPI_URL")
                .unwrap_or_else(|_| "https://serpapi.com/search".to_string()),
            currency: std::env::var("FLIGHT_CURRENCY").unwrap_or_else(|_| "INR".to_string()),
        }
    }
}

/// Configuration for the generative-language provider (Gemini).
#[derive(Debug, Clone)]
pub struct PromptApiConfig {
    /// Gemini key. `None` means completions fail at call time.
    pub api_key: Option<SecretString>,
    /// API base URL (up to and including the version segment).
    pub base_url: String,
    /// Model identifier.
    pub model: String,
}

impl PromptApiConfig {
    /// Build from `GEMINI_API_KEY` (and optional `GEMINI_URL`, `GEMINI_MODEL`).
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("GEMINI_API_KEY").ok().map(SecretString::from),
            base_url: std::env::var("GEMINI_URL").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta".to_string()
            }),
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-pro".to_string()),
        }
    }
}

/// Chat channel configuration.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Pause between the user echo and the bot reply. Pure UI pacing.
    pub reply_delay: Duration,
}

impl ChatConfig {
    pub fn from_env() -> Self {
        let delay_ms: u64 = std::env::var("FLIGHT_ASSIST_REPLY_DELAY_MS")
            .unwrap_or_else(|_| "1000".to_string())
            .parse()
            .unwrap_or(1000);
        Self {
            reply_delay: Duration::from_millis(delay_ms),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(1000),
        }
    }
}
