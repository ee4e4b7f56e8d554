use std::sync::Arc;

use flight_assist::config::{ChatConfig, FlightApiConfig, PromptApiConfig};
use flight_assist::dialogue::routes::{ChatState, chat_routes};
use flight_assist::gateway::{
    FlightSearch, GatewayState, GeminiClient, PromptCompletion, SerpApiClient, gateway_routes,
};
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let port: u16 = std::env::var("FLIGHT_ASSIST_PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse()
        .unwrap_or(5000);

    // Provider keys are read here once and handed to the clients as explicit
    // config. A missing search key is a warning, not a startup failure —
    // searches fail at call time instead.
    let flight_config = FlightApiConfig::from_env();
    if flight_config.api_key.is_none() {
        tracing::warn!("SERPAPI_KEY is not set. Flight searches will fail.");
    }
    let prompt_config = PromptApiConfig::from_env();
    if prompt_config.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set. Prompt completions will fail.");
    }
    let chat_config = ChatConfig::from_env();

    eprintln!("✈️ Flight Assist v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Chat WS: ws://0.0.0.0:{port}/ws/chat");
    eprintln!("   Flight API: http://0.0.0.0:{port}/api/flight");
    eprintln!("   Prompt API: http://0.0.0.0:{port}/api/gemini\n");

    let flights: Arc<dyn FlightSearch> = Arc::new(SerpApiClient::new(flight_config));
    let prompts: Arc<dyn PromptCompletion> = Arc::new(GeminiClient::new(prompt_config));

    let app = gateway_routes(GatewayState {
        flights: Arc::clone(&flights),
        prompts,
    })
    .merge(chat_routes(ChatState {
        flights,
        reply_delay: chat_config.reply_delay,
    }))
    // The chat front end is served from another origin.
    .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(port, "Flight Assist server started");
    axum::serve(listener, app).await?;

    Ok(())
}
