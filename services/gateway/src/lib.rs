//! Trading dashboard API service
//!
//! Serves the symbol catalog, accepts and persists price-band-validated
//! orders, and streams simulated ticks over WebSocket.
//!
//! # Architecture
//!
//! ```text
//! Symbol Catalog (read-only, loaded once)
//!      │                │
//!  ┌───▼─────────┐  ┌───▼──────────┐
//!  │OrderService │  │TickGenerator │
//!  └───┬─────────┘  └───┬──────────┘
//!      │                │
//!  ┌───▼──────┐   ┌────▼─────────┐
//!  │OrderStore│   │ /ws/ticks    │
//!  │(per-file)│   │ stream loop  │
//!  └──────────┘   └──────────────┘
//! ```
//!
//! Every connection runs as an independent tokio task; the only shared
//! state is the catalog (immutable) and the order store (per-symbol lock).

pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod orders;
pub mod router;
pub mod state;
pub mod store;
pub mod ticks;

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time as Unix seconds.
pub fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

/// Current wall-clock time as Unix milliseconds.
pub(crate) fn unix_now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}
