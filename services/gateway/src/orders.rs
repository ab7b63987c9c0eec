//! Order validation and creation
//!
//! The order service owns the price-band check and order identity. Ids
//! come from an atomic sequence seeded with the startup clock, so rapid
//! concurrent creates get distinct ids regardless of clock resolution.

use crate::catalog::SymbolCatalog;
use crate::store::OrderStore;
use crate::{unix_now, unix_now_millis};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use types::errors::OrderError;
use types::order::{Order, OrderRequest};
use types::symbol::Symbol;

/// Inclusive price band around a close price: `[0.8 × close, 1.2 × close]`.
pub fn price_band(close_price: Decimal) -> (Decimal, Decimal) {
    (close_price * dec!(0.8), close_price * dec!(1.2))
}

/// Validates, persists, and lists orders.
pub struct OrderService {
    catalog: Arc<SymbolCatalog>,
    store: Arc<OrderStore>,
    next_id: AtomicI64,
}

impl OrderService {
    pub fn new(catalog: Arc<SymbolCatalog>, store: Arc<OrderStore>) -> Self {
        Self {
            catalog,
            store,
            next_id: AtomicI64::new(unix_now_millis()),
        }
    }

    /// Validate a request against the catalog and the price band.
    ///
    /// Returns the catalog symbol so callers can reuse the lookup.
    fn validate(&self, request: &OrderRequest) -> Result<&Symbol, OrderError> {
        let symbol = self
            .catalog
            .get(&request.symbol)
            .ok_or_else(|| OrderError::InvalidSymbol(request.symbol.clone()))?;

        if request.quantity == 0 {
            return Err(OrderError::InvalidQuantity);
        }
        if request.price <= Decimal::ZERO {
            return Err(OrderError::InvalidPrice);
        }

        let (min, max) = price_band(symbol.close_price);
        if request.price < min || request.price > max {
            return Err(OrderError::PriceOutOfRange {
                symbol: symbol.symbol.clone(),
                price: request.price,
                min,
                max,
            });
        }

        Ok(symbol)
    }

    /// Validate a request, assign identity, and persist the order.
    ///
    /// A storage failure propagates and leaves no partial state visible to
    /// subsequent reads.
    pub async fn create(&self, request: OrderRequest) -> Result<Order, OrderError> {
        self.validate(&request)?;

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let order = Order::from_request(request, id, unix_now());

        self.store.append(&order).await?;
        Ok(order)
    }

    /// List a symbol's orders in insertion order, oldest first.
    ///
    /// Unknown symbols fail with `InvalidSymbol` even though the store
    /// would just report an empty sequence.
    pub async fn list(&self, symbol: &str) -> Result<Vec<Order>, OrderError> {
        if !self.catalog.contains(symbol) {
            return Err(OrderError::InvalidSymbol(symbol.to_string()));
        }
        Ok(self.store.load(symbol).await?)
    }
}
