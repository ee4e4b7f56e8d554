//! Proxy gateway — relays requests to the third-party flight-search and
//! generative-language APIs and returns their JSON verbatim.
//!
//! Both upstreams sit behind traits so the dialogue engine and the HTTP
//! routes can be exercised against stubs.

pub mod flight;
pub mod prompt;
pub mod routes;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::GatewayError;

pub use flight::SerpApiClient;
pub use prompt::GeminiClient;
pub use routes::{GatewayState, gateway_routes};

/// One-shot flight search against the upstream provider.
#[async_trait]
pub trait FlightSearch: Send + Sync {
    /// Search one-way flights. Returns the provider's JSON unchanged.
    async fn search(&self, from: &str, to: &str, date: &str) -> Result<Value, GatewayError>;

    /// Whether a provider key is configured. A missing key dominates every
    /// other failure: callers report it before even looking at parameters.
    fn has_key(&self) -> bool {
        true
    }
}

/// One-shot free-text completion against the upstream provider.
#[async_trait]
pub trait PromptCompletion: Send + Sync {
    /// Complete a prompt. Returns the provider's JSON unchanged.
    async fn complete(&self, prompt: &str) -> Result<Value, GatewayError>;
}
