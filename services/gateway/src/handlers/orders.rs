use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use types::order::{Order, OrderRequest};

#[derive(Debug, Deserialize)]
pub struct ListOrdersQuery {
    pub symbol: String,
}

/// `POST /api/orders`
///
/// Validates the request against the catalog and the ±20% price band,
/// persists the order, and echoes it back with its assigned identity.
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<OrderRequest>,
) -> Result<Json<Order>, AppError> {
    let order = state.orders.create(request).await?;
    Ok(Json(order))
}

/// `GET /api/orders?symbol=<key>`
///
/// Lists a symbol's orders in creation order; 400 for unknown symbols.
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<Vec<Order>>, AppError> {
    let orders = state.orders.list(&query.symbol).await?;
    Ok(Json(orders))
}
