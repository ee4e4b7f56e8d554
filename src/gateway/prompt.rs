//! Gemini generateContent client.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::{Value, json};

use crate::config::PromptApiConfig;
use crate::error::GatewayError;

use super::PromptCompletion;

const PROVIDER: &str = "Gemini";

/// One-shot client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    config: PromptApiConfig,
}

impl GeminiClient {
    pub fn new(config: PromptApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl PromptCompletion for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<Value, GatewayError> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or(GatewayError::MissingKey { provider: PROVIDER })?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        tracing::info!(model = %self.config.model, "Requesting Gemini completion");

        let response = self
            .http
            .post(&url)
            .query(&[("key", api_key.expose_secret())])
            .json(&json!({
                "contents": [{ "parts": [{ "text": prompt }] }],
            }))
            .send()
            .await
            .map_err(|e| GatewayError::Upstream {
                provider: PROVIDER,
                reason: e.to_string(),
            })?
            .error_for_status()
            .map_err(|e| GatewayError::Upstream {
                provider: PROVIDER,
                reason: e.to_string(),
            })?;

        response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse {
                provider: PROVIDER,
                reason: e.to_string(),
            })
    }
}
