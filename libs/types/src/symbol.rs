//! Tradeable symbol types
//!
//! A symbol is loaded once from the catalog file at startup and is
//! read-only for the process lifetime.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A tradeable instrument with its reference close price.
///
/// The close price bounds order validation (±20%) and tick generation
/// (±5%). The wire schema uses `closePrice`; every other field name is
/// identical in both representations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    /// Unique symbol key, e.g. `AAPL`. Lookups are case-sensitive.
    pub symbol: String,
    /// Human-readable instrument name
    pub name: String,
    /// Listing market, e.g. `NASDAQ`
    pub market: String,
    /// Reference close price, strictly positive
    #[serde(rename = "closePrice")]
    pub close_price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_symbol_wire_schema_uses_close_price_camel_case() {
        let symbol = Symbol {
            symbol: "AAPL".to_string(),
            name: "Apple Inc.".to_string(),
            market: "NASDAQ".to_string(),
            close_price: dec!(150.0),
        };

        let json = serde_json::to_string(&symbol).unwrap();
        assert!(json.contains("\"closePrice\""));
        assert!(!json.contains("close_price"));
    }

    #[test]
    fn test_symbol_deserializes_from_catalog_record() {
        let json = r#"{"symbol":"MSFT","name":"Microsoft Corp.","market":"NASDAQ","closePrice":300.0}"#;
        let symbol: Symbol = serde_json::from_str(json).unwrap();

        assert_eq!(symbol.symbol, "MSFT");
        assert_eq!(symbol.market, "NASDAQ");
        assert_eq!(symbol.close_price, dec!(300.0));
    }
}
