//! Order lifecycle types
//!
//! An order is a validated buy/sell intent for a symbol. Orders are
//! immutable after creation and stored append-only, oldest first.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

/// An incoming order submission, before identity is assigned.
///
/// Quantity and price are validated by the order service: both must be
/// strictly positive, and the price must fall within the symbol's band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub symbol: String,
    pub side: Side,
    pub quantity: u32,
    pub price: Decimal,
}

/// A persisted order: the request fields plus assigned identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Process-unique identifier, monotonically increasing
    pub id: i64,
    pub symbol: String,
    pub side: Side,
    pub quantity: u32,
    pub price: Decimal,
    /// Creation time, Unix seconds
    pub timestamp: i64,
}

impl Order {
    /// Build an order from a validated request and freshly assigned identity.
    pub fn from_request(request: OrderRequest, id: i64, timestamp: i64) -> Self {
        Self {
            id,
            symbol: request.symbol,
            side: request.side,
            quantity: request.quantity,
            price: request.price,
            timestamp,
        }
    }
}
