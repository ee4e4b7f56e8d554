//! WebSocket chat endpoint — one dialogue session per socket.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::ws::{Message as WsFrame, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ChannelError;
use crate::gateway::FlightSearch;

use super::draft::PassengerCounts;
use super::session::{Session, UserInput};
use super::transcript::Message;

// ── JSON Protocol ───────────────────────────────────────────────────────

/// Message from the chat client → server. Shaped by the input widget the
/// current step shows: free text, a calendar date, or four counters.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ClientMessage {
    Message { content: String },
    Date { date: NaiveDate },
    Passengers {
        adults: u8,
        children: u8,
        seniors: u8,
        infants: u8,
    },
}

impl ClientMessage {
    fn into_input(self) -> Option<UserInput> {
        match self {
            Self::Message { content } => {
                let content = content.trim().to_string();
                if content.is_empty() {
                    None
                } else {
                    Some(UserInput::Text(content))
                }
            }
            Self::Date { date } => Some(UserInput::Date(date)),
            Self::Passengers {
                adults,
                children,
                seniors,
                infants,
            } => Some(UserInput::Passengers(PassengerCounts::new(
                adults, children, seniors, infants,
            ))),
        }
    }
}

/// Message from server → chat client.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ServerMessage {
    /// A transcript message (user echo or bot reply).
    Message { message: Message },
    /// The scripted flow has run to its end.
    Complete,
}

// ── Routes ──────────────────────────────────────────────────────────────

/// Shared state for the chat endpoint.
#[derive(Clone)]
pub struct ChatState {
    pub flights: Arc<dyn FlightSearch>,
    /// Pause between the user echo and the bot replies. UI pacing only.
    pub reply_delay: Duration,
}

/// Build the chat WebSocket routes.
pub fn chat_routes(state: ChatState) -> Router {
    Router::new()
        .route("/ws/chat", get(ws_chat_handler))
        .with_state(state)
}

async fn ws_chat_handler(
    ws: WebSocketUpgrade,
    State(state): State<ChatState>,
) -> impl IntoResponse {
    info!("Chat client connecting");
    ws.on_upgrade(|socket| handle_chat_socket(socket, state))
}

async fn handle_chat_socket(mut socket: WebSocket, state: ChatState) {
    info!("Chat client connected");

    // The session lives and dies with this socket.
    let mut session = Session::new(Arc::clone(&state.flights));

    // Greeting first.
    for message in session.transcript().messages().to_vec() {
        if send_message(&mut socket, message).await.is_err() {
            return;
        }
    }

    while let Some(result) = socket.recv().await {
        match result {
            Ok(WsFrame::Text(text)) => {
                let input = match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(client_msg) => client_msg.into_input(),
                    Err(e) => {
                        debug!(error = %e, text = %text, "Invalid JSON from chat client");
                        continue;
                    }
                };
                let Some(input) = input else { continue };

                let was_complete = session.is_complete();
                let turn = session.handle(input).await;

                if let Some(user) = turn.user {
                    if send_message(&mut socket, user).await.is_err() {
                        return;
                    }
                }
                if !turn.bot.is_empty() {
                    // Scripted pause so the bot doesn't answer instantly.
                    tokio::time::sleep(state.reply_delay).await;
                    for message in turn.bot {
                        if send_message(&mut socket, message).await.is_err() {
                            return;
                        }
                    }
                }
                if session.is_complete() && !was_complete {
                    if send(&mut socket, &ServerMessage::Complete).await.is_err() {
                        return;
                    }
                }
            }
            Ok(WsFrame::Ping(data)) => {
                if socket.send(WsFrame::Pong(data)).await.is_err() {
                    break;
                }
            }
            Ok(WsFrame::Close(_)) => {
                info!("Chat client disconnected");
                break;
            }
            Err(e) => {
                warn!(error = %e, "Chat WebSocket error");
                break;
            }
            _ => {}
        }
    }

    info!("Chat connection closed");
}

async fn send_message(socket: &mut WebSocket, message: Message) -> Result<(), ChannelError> {
    send(socket, &ServerMessage::Message { message }).await
}

async fn send(socket: &mut WebSocket, message: &ServerMessage) -> Result<(), ChannelError> {
    let json =
        serde_json::to_string(message).map_err(|e| ChannelError::SendFailed(e.to_string()))?;
    socket.send(WsFrame::Text(json.into())).await.map_err(|e| {
        debug!(error = %e, "Chat client disconnected during send");
        ChannelError::SendFailed(e.to_string())
    })
}
