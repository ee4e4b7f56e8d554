//! Error types for Flight Assist.

/// Upstream-proxy errors.
///
/// The variants map onto how failures surface to HTTP callers: a missing
/// parameter is user-correctable (400), a missing provider key is
/// operator-correctable (500), and an upstream failure is transient (500 with
/// a generic body — the detail stays in the logs).
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("{0}")]
    MissingParameter(String),

    #[error("Missing {provider} API key")]
    MissingKey { provider: &'static str },

    #[error("{provider} call failed: {reason}")]
    Upstream {
        provider: &'static str,
        reason: String,
    },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse {
        provider: &'static str,
        reason: String,
    },
}

/// Chat channel errors.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("Failed to send on chat socket: {0}")]
    SendFailed(String),
}
