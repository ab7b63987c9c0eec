use crate::state::AppState;
use axum::{extract::State, Json};
use types::symbol::Symbol;

/// `GET /api/symbols`
///
/// The full catalog in file order.
pub async fn list_symbols(State(state): State<AppState>) -> Json<Vec<Symbol>> {
    Json(state.catalog.all().to_vec())
}
