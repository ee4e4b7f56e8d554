//! REST proxy endpoints for the two upstream APIs.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::GatewayError;

use super::{FlightSearch, PromptCompletion};

/// Shared state for gateway routes.
#[derive(Clone)]
pub struct GatewayState {
    pub flights: Arc<dyn FlightSearch>,
    pub prompts: Arc<dyn PromptCompletion>,
}

/// Build the gateway REST routes.
pub fn gateway_routes(state: GatewayState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/flight", get(search_flights))
        .route("/api/gemini", post(complete_prompt))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "flight-assist"
    }))
}

#[derive(Debug, Deserialize)]
struct FlightQuery {
    from: Option<String>,
    to: Option<String>,
    date: Option<String>,
}

/// GET /api/flight?from=&to=&date=
///
/// 500 if the provider key is unset (checked before anything else), 400 if
/// any parameter is absent, 500 if the upstream fails, otherwise the
/// upstream JSON verbatim.
async fn search_flights(
    State(state): State<GatewayState>,
    Query(query): Query<FlightQuery>,
) -> Result<Json<serde_json::Value>, GatewayError> {
    // An unset key is reported first, whatever the parameters look like.
    if !state.flights.has_key() {
        return Err(GatewayError::MissingKey { provider: "SerpApi" });
    }

    let (Some(from), Some(to), Some(date)) = (query.from, query.to, query.date) else {
        return Err(GatewayError::MissingParameter(
            "Missing 'from', 'to', or 'date' parameters".to_string(),
        ));
    };

    let results = state.flights.search(&from, &to, &date).await?;
    Ok(Json(results))
}

#[derive(Debug, Deserialize)]
struct PromptRequest {
    prompt: String,
}

/// POST /api/gemini with `{"prompt": "..."}`.
async fn complete_prompt(
    State(state): State<GatewayState>,
    Json(request): Json<PromptRequest>,
) -> Result<Json<serde_json::Value>, GatewayError> {
    let completion = state.prompts.complete(&request.prompt).await?;
    Ok(Json(completion))
}

impl IntoResponse for GatewayError {
    /// Missing parameters are the caller's to fix (400); everything else is a
    /// 500. Upstream detail goes to the log, never to the caller.
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            GatewayError::MissingParameter(message) => {
                (StatusCode::BAD_REQUEST, message.clone())
            }
            GatewayError::MissingKey { provider } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Missing {provider} API key"),
            ),
            GatewayError::Upstream { provider, .. }
            | GatewayError::InvalidResponse { provider, .. } => {
                tracing::warn!(error = %self, "Upstream call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("{provider} API call failed."),
                )
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
