//! Simulated quote types
//!
//! Ticks are generated on demand and never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An ephemeral simulated quote for a symbol.
///
/// Prices carry at most two decimal digits and fall within ±5% of the
/// symbol's close price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub symbol: String,
    pub price: Decimal,
    /// Simulated trade volume, 1 to 1000 inclusive
    pub volume: u32,
    /// Generation time, Unix seconds
    pub timestamp: i64,
}
