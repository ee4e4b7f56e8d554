//! SerpApi Google Flights client.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::Value;

use crate::config::FlightApiConfig;
use crate::error::GatewayError;

use super::FlightSearch;

const PROVIDER: &str = "SerpApi";

/// One-shot client for the SerpApi `google_flights` engine. No retries, no
/// timeout beyond the reqwest default.
pub struct SerpApiClient {
    http: reqwest::Client,
    config: FlightApiConfig,
}

impl SerpApiClient {
    pub fn new(config: FlightApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl FlightSearch for SerpApiClient {
    fn has_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    async fn search(&self, from: &str, to: &str, date: &str) -> Result<Value, GatewayError> {
        // Key check comes first: with no key configured, the upstream is
        // never contacted.
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or(GatewayError::MissingKey { provider: PROVIDER })?;

        tracing::info!(%from, %to, %date, "Searching Google Flights via SerpApi");

        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("engine", "google_flights"),
                ("departure_id", from),
                ("arrival_id", to),
                ("outbound_date", date),
                // One-way trip.
                ("type", "2"),
                ("currency", self.config.currency.as_str()),
                ("api_key", api_key.expose_secret()),
            ])
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

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_fails_without_contacting_upstream() {
        // A base URL nothing listens on: if the client attempted the call,
        // the error would be an Upstream connection failure instead.
        let client = SerpApiClient::new(FlightApiConfig {
            api_key: None,
            base_url: "http://127.0.0.1:1".to_string(),
            currency: "INR".to_string(),
        });

        let err = client.search("DEL", "BOM", "2025-01-01").await.unwrap_err();
        assert!(matches!(err, GatewayError::MissingKey { provider: "SerpApi" }));
    }

    #[tokio::test]
    async fn unreachable_upstream_is_an_upstream_error() {
        let client = SerpApiClient::new(FlightApiConfig {
            api_key: Some(secrecy::SecretString::from("test-key")),
            base_url: "http://127.0.0.1:1".to_string(),
            currency: "INR".to_string(),
        });

        let err = client.search("DEL", "BOM", "2025-01-01").await.unwrap_err();
        assert!(matches!(err, GatewayError::Upstream { provider: "SerpApi", .. }));
    }
}
