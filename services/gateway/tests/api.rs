//! End-to-end HTTP tests for the symbols, orders, and health endpoints.

mod common;

use common::spawn_server;
use reqwest::StatusCode;
use rust_decimal_macros::dec;
use serde_json::json;
use types::order::{Order, Side};
use types::symbol::Symbol;

#[tokio::test]
async fn symbols_endpoint_returns_catalog_in_wire_schema() {
    let (addr, _dir) = spawn_server().await;

    let response = reqwest::get(format!("http://{addr}/api/symbols"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.unwrap();
    assert!(body.contains("closePrice"));

    let symbols: Vec<Symbol> = serde_json::from_str(&body).unwrap();
    assert_eq!(symbols.len(), 3);
    assert_eq!(symbols[0].symbol, "AAPL");
    assert_eq!(symbols[0].close_price, dec!(150.0));
}

#[tokio::test]
async fn order_within_band_is_created_and_echoed() {
    let (addr, _dir) = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{addr}/api/orders"))
        .json(&json!({"symbol": "AAPL", "side": "BUY", "quantity": 10, "price": 155.0}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let order: Order = response.json().await.unwrap();
    assert_eq!(order.symbol, "AAPL");
    assert_eq!(order.side, Side::Buy);
    assert_eq!(order.quantity, 10);
    assert_eq!(order.price, dec!(155.0));
    assert!(order.timestamp > 0);
}

#[tokio::test]
async fn order_outside_band_is_rejected_with_bounds() {
    let (addr, _dir) = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{addr}/api/orders"))
        .json(&json!({"symbol": "AAPL", "side": "BUY", "quantity": 10, "price": 100.0}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.text().await.unwrap();
    assert!(body.contains("AAPL"));
    assert!(body.contains("120.00"));
    assert!(body.contains("180.00"));
}

#[tokio::test]
async fn order_for_unknown_symbol_is_rejected() {
    let (addr, _dir) = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{addr}/api/orders"))
        .json(&json!({"symbol": "NOPE", "side": "SELL", "quantity": 1, "price": 10.0}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.text().await.unwrap().contains("Invalid symbol"));
}

#[tokio::test]
async fn created_order_is_visible_in_listing() {
    let (addr, _dir) = spawn_server().await;
    let client = reqwest::Client::new();

    let created: Order = client
        .post(format!("http://{addr}/api/orders"))
        .json(&json!({"symbol": "MSFT", "side": "BUY", "quantity": 5, "price": 310.0}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let listed: Vec<Order> = client
        .get(format!("http://{addr}/api/orders?symbol=MSFT"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed, vec![created]);

    // Listing again without an intervening create is identical.
    let again: Vec<Order> = client
        .get(format!("http://{addr}/api/orders?symbol=MSFT"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(again, listed);
}

#[tokio::test]
async fn listing_without_orders_is_empty() {
    let (addr, _dir) = spawn_server().await;

    let response = reqwest::get(format!("http://{addr}/api/orders?symbol=GOOGL"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let orders: Vec<Order> = response.json().await.unwrap();
    assert!(orders.is_empty());
}

#[tokio::test]
async fn listing_unknown_symbol_is_rejected() {
    let (addr, _dir) = spawn_server().await;

    let response = reqwest::get(format!("http://{addr}/api/orders?symbol=NOPE"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn listing_without_symbol_param_is_rejected() {
    let (addr, _dir) = spawn_server().await;

    let response = reqwest::get(format!("http://{addr}/api/orders"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_probe_responds() {
    let (addr, _dir) = spawn_server().await;

    let response = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), r#"{"status":"ok"}"#);
}
