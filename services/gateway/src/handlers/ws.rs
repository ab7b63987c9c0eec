//! Tick streaming over WebSocket
//!
//! Per-connection state machine:
//!
//! ```text
//! AwaitingSubscription ──subscribe{symbol}──▶ Streaming{symbol}
//!        ▲                                        │
//!        └────────── invalid symbol ◀─────────────┘
//! ```
//!
//! While streaming, each sent tick is followed by a randomized 1–2s wait
//! to a fixed deadline. Inbound frames received during the wait are
//! consumed without shortening it: a new subscribe replaces the symbol for
//! the next iteration, ignored frames change nothing, and a close or
//! transport error ends the connection task in any state. An invalid
//! symbol sends exactly one error
//! payload and drops back to awaiting a subscription; it never tears down
//! the connection.

use crate::state::AppState;
use crate::ticks::stream_delay;
use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    extract::State,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tokio::time::{sleep_until, Instant};
use types::tick::Tick;

/// Per-connection streaming state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamState {
    /// Connected, no symbol subscribed yet.
    AwaitingSubscription,
    /// Emitting ticks for one subscribed symbol key.
    Streaming { symbol: String },
}

/// Client subscription request: `{"action":"subscribe","symbol":"<key>"}`.
///
/// The only client-to-server message type.
#[derive(Debug, Clone, Deserialize)]
struct SubscribeMessage {
    action: String,
    symbol: String,
}

/// Server-to-client payloads.
///
/// Serialized untagged so the wire stays a plain tick object or
/// `{"error":"<message>"}`; the type-level variant replaces probing for
/// an `error` key.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Outgoing {
    Tick(Tick),
    Error { error: String },
}

/// Apply one inbound text frame to the state machine.
///
/// A well-formed subscribe stores (or replaces) the symbol key without
/// validating it; validation happens per tick. Malformed payloads leave
/// the state unchanged.
pub fn apply_message(state: StreamState, text: &str) -> StreamState {
    match serde_json::from_str::<SubscribeMessage>(text) {
        Ok(msg) if msg.action == "subscribe" => StreamState::Streaming { symbol: msg.symbol },
        _ => state,
    }
}

/// `GET /ws/ticks`
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: AppState) {
    tracing::debug!("tick stream client connected");
    let mut stream_state = StreamState::AwaitingSubscription;

    'conn: loop {
        match stream_state.clone() {
            StreamState::AwaitingSubscription => match socket.recv().await {
                Some(Ok(Message::Text(text))) => {
                    stream_state = apply_message(stream_state, &text);
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    tracing::debug!(error = %err, "tick stream transport error");
                    break;
                }
            },
            StreamState::Streaming { symbol } => match state.ticker.generate_for(&symbol) {
                Ok(tick) => {
                    if send_json(&mut socket, &Outgoing::Tick(tick)).await.is_err() {
                        break;
                    }
                    // Wait out the full inter-tick delay against a fixed
                    // deadline. Inbound frames are consumed without
                    // shortening the wait: a resubscribe takes effect at
                    // the next iteration, ignored frames change nothing,
                    // and disconnect ends the task immediately.
                    let deadline = Instant::now() + stream_delay();
                    loop {
                        tokio::select! {
                            _ = sleep_until(deadline) => break,
                            msg = socket.recv() => match msg {
                                Some(Ok(Message::Text(text))) => {
                                    stream_state = apply_message(stream_state, &text);
                                }
                                Some(Ok(Message::Close(_))) | None => break 'conn,
                                Some(Ok(_)) => {}
                                Some(Err(err)) => {
                                    tracing::debug!(error = %err, "tick stream transport error");
                                    break 'conn;
                                }
                            },
                        }
                    }
                }
                Err(err) => {
                    let payload = Outgoing::Error {
                        error: err.to_string(),
                    };
                    if send_json(&mut socket, &payload).await.is_err() {
                        break;
                    }
                    stream_state = StreamState::AwaitingSubscription;
                }
            },
        }
    }

    tracing::debug!("tick stream client disconnected");
}

async fn send_json(socket: &mut WebSocket, payload: &Outgoing) -> Result<(), axum::Error> {
    match serde_json::to_string(payload) {
        Ok(json) => socket.send(Message::Text(json.into())).await,
        Err(err) => {
            tracing::warn!(error = %err, "failed to serialize outgoing payload");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_subscribe_transitions_to_streaming() {
        let next = apply_message(
            StreamState::AwaitingSubscription,
            r#"{"action":"subscribe","symbol":"AAPL"}"#,
        );
        assert_eq!(
            next,
            StreamState::Streaming {
                symbol: "AAPL".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_payloads_leave_state_unchanged() {
        for text in [
            "not json",
            "{}",
            r#"{"action":"subscribe"}"#,
            r#"{"action":"subscribe","symbol":42}"#,
            r#"{"symbol":"AAPL"}"#,
            r#"{"action":"unsubscribe","symbol":"AAPL"}"#,
        ] {
            let next = apply_message(StreamState::AwaitingSubscription, text);
            assert_eq!(next, StreamState::AwaitingSubscription, "payload: {text}");
        }
    }

    #[test]
    fn test_resubscribe_replaces_symbol() {
        let streaming = StreamState::Streaming {
            symbol: "AAPL".to_string(),
        };
        let next = apply_message(streaming, r#"{"action":"subscribe","symbol":"GOOGL"}"#);
        assert_eq!(
            next,
            StreamState::Streaming {
                symbol: "GOOGL".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_payload_keeps_current_subscription() {
        let streaming = StreamState::Streaming {
            symbol: "AAPL".to_string(),
        };
        let next = apply_message(streaming.clone(), "garbage");
        assert_eq!(next, streaming);
    }

    #[test]
    fn test_outgoing_tick_serializes_as_plain_object() {
        let payload = Outgoing::Tick(Tick {
            symbol: "AAPL".to_string(),
            price: dec!(151.25),
            volume: 12,
            timestamp: 1_708_123_456,
        });

        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"symbol\":\"AAPL\""));
        assert!(!json.contains("error"));
    }

    #[test]
    fn test_outgoing_error_serializes_as_error_object() {
        let payload = Outgoing::Error {
            error: "Invalid symbol: NOPE".to_string(),
        };

        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"error":"Invalid symbol: NOPE"}"#
        );
    }
}
