//! Simulated tick generation
//!
//! Ticks are drawn uniformly in whole cents over ±5% of the symbol's
//! close price, so every generated price has at most two decimal digits
//! and sits inside the band exactly. No side effects beyond the RNG and
//! the clock; nothing is persisted.

use crate::catalog::SymbolCatalog;
use crate::unix_now;
use rand::Rng;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::time::Duration;
use types::errors::TickError;
use types::symbol::Symbol;
use types::tick::Tick;

/// Inclusive cent bounds of the ±5% tick band around a close price.
///
/// `close × 0.95` in cents is `close × 95`, rounded inward so the drawn
/// price never leaves the band.
fn cent_bounds(close_price: Decimal) -> (i64, i64) {
    let min = (close_price * dec!(95)).ceil().to_i64().unwrap_or(1).max(1);
    let max = (close_price * dec!(105))
        .floor()
        .to_i64()
        .unwrap_or(min)
        .max(min);
    (min, max)
}

/// Generate one simulated tick for a symbol.
pub fn generate(symbol: &Symbol) -> Tick {
    let (min_cents, max_cents) = cent_bounds(symbol.close_price);
    let mut rng = rand::thread_rng();

    Tick {
        symbol: symbol.symbol.clone(),
        price: Decimal::new(rng.gen_range(min_cents..=max_cents), 2),
        volume: rng.gen_range(1..=1000),
        timestamp: unix_now(),
    }
}

/// Randomized inter-tick delay for the streaming loop, 1–2 seconds.
pub fn stream_delay() -> Duration {
    Duration::from_millis(rand::thread_rng().gen_range(1000..=2000))
}

/// Tick generator bound to the symbol catalog.
#[derive(Clone)]
pub struct TickGenerator {
    catalog: Arc<SymbolCatalog>,
}

impl TickGenerator {
    pub fn new(catalog: Arc<SymbolCatalog>) -> Self {
        Self { catalog }
    }

    /// Generate a tick for a symbol key.
    ///
    /// The lookup is a case-sensitive exact match; unknown keys surface
    /// `InvalidSymbol` rather than a default tick.
    pub fn generate_for(&self, key: &str) -> Result<Tick, TickError> {
        self.catalog
            .get(key)
            .map(generate)
            .ok_or_else(|| TickError::InvalidSymbol(key.to_string()))
    }
}
