//! Error types for the trading dashboard backend
//!
//! Error taxonomy using thiserror. Validation errors (unknown symbol,
//! out-of-band price) are user errors and keep their messages all the way
//! to the HTTP boundary; storage and catalog failures are internal and get
//! translated to generic responses there.

use rust_decimal::Decimal;
use thiserror::Error;

/// Symbol catalog loading errors
///
/// Both variants are fatal at startup: the process refuses to serve
/// without a readable catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Symbols file not found: {path}")]
    NotFound { path: String },

    #[error("Malformed symbols file {path}: {reason}")]
    Malformed { path: String, reason: String },
}

/// Order persistence errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt order file for {symbol}: {reason}")]
    Corrupt { symbol: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Order validation and creation errors
#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error("Price {price} out of range for {symbol} (allowed: {min:.2} - {max:.2})")]
    PriceOutOfRange {
        symbol: String,
        price: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("Invalid quantity: must be at least 1")]
    InvalidQuantity,

    #[error("Invalid price: must be positive")]
    InvalidPrice,

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

/// Tick generation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TickError {
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),
}
