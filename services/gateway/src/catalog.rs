//! Symbol catalog
//!
//! Loads the static symbol list once at startup and serves O(1) lookups
//! for the rest of the process lifetime. The catalog is never reloaded
//! or mutated; it is shared across connection tasks behind an `Arc`.

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::path::Path;
use types::errors::CatalogError;
use types::symbol::Symbol;

/// Read-only symbol catalog with O(1) lookup by symbol key.
///
/// Listing order follows the catalog file.
#[derive(Debug)]
pub struct SymbolCatalog {
    symbols: Vec<Symbol>,
    index: HashMap<String, usize>,
}

impl SymbolCatalog {
    /// Load the catalog from a JSON array of symbol records.
    ///
    /// Fails with `NotFound` if the file is absent and `Malformed` if it
    /// cannot be parsed into the required shape or contains a non-positive
    /// close price.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let display_path = path.display().to_string();

        let raw = std::fs::read_to_string(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                CatalogError::NotFound { path: display_path.clone() }
            } else {
                CatalogError::Malformed {
                    path: display_path.clone(),
                    reason: err.to_string(),
                }
            }
        })?;

        let symbols: Vec<Symbol> =
            serde_json::from_str(&raw).map_err(|err| CatalogError::Malformed {
                path: display_path.clone(),
                reason: err.to_string(),
            })?;

        for symbol in &symbols {
            if symbol.close_price <= Decimal::ZERO {
                return Err(CatalogError::Malformed {
                    path: display_path,
                    reason: format!("non-positive closePrice for {}", symbol.symbol),
                });
            }
        }

        Ok(Self::from_symbols(symbols))
    }

    /// Build a catalog from an in-memory symbol list.
    ///
    /// Later records win on duplicate keys, matching the load path.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Self {
        let index = symbols
            .iter()
            .enumerate()
            .map(|(position, symbol)| (symbol.symbol.clone(), position))
            .collect();
        Self { symbols, index }
    }

    /// Look up a symbol by its key (case-sensitive exact match).
    pub fn get(&self, key: &str) -> Option<&Symbol> {
        self.index.get(key).map(|&position| &self.symbols[position])
    }

    /// Whether the catalog knows this key.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// All symbols in catalog file order.
    pub fn all(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
