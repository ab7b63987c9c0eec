//! Types library for the trading dashboard backend
//!
//! This library provides the core type definitions shared across the
//! dashboard services: the symbol catalog entries, order lifecycle types,
//! simulated tick quotes, and the error taxonomy.
//!
//! # Modules
//! - `symbol`: Tradeable symbol records with reference close prices
//! - `order`: Order request and persisted order types
//! - `tick`: Ephemeral simulated quote types
//! - `errors`: Error taxonomy
//!
//! # Wire schema
//! External JSON uses `quantity` and `closePrice`; internal fields are
//! snake_case with serde renames at the boundary where they differ.

// Public modules
pub mod errors;
pub mod order;
pub mod symbol;
pub mod tick;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::order::*;
    pub use crate::symbol::*;
    pub use crate::tick::*;
}
