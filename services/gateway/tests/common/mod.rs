//! Shared harness for gateway integration tests: builds a real router on
//! an ephemeral port with a temporary catalog and order store.

use gateway::catalog::SymbolCatalog;
use gateway::config::Settings;
use gateway::router::create_router;
use gateway::state::AppState;
use gateway::store::OrderStore;
use tempfile::TempDir;

const CATALOG: &str = r#"[
    {"symbol": "AAPL", "name": "Apple Inc.", "market": "NASDAQ", "closePrice": 150.0},
    {"symbol": "GOOGL", "name": "Alphabet Inc.", "market": "NASDAQ", "closePrice": 2800.0},
    {"symbol": "MSFT", "name": "Microsoft Corp.", "market": "NASDAQ", "closePrice": 300.0}
]"#;

/// Spawn the service on 127.0.0.1 with an ephemeral port.
///
/// Returns the bound authority (`host:port`) and the temp dir keeping the
/// catalog and order files alive for the test's duration.
pub async fn spawn_server() -> (String, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let symbols_path = dir.path().join("symbols.json");
    std::fs::write(&symbols_path, CATALOG).unwrap();

    let catalog = SymbolCatalog::load(&symbols_path).unwrap();
    let store = OrderStore::new(dir.path().join("orders"));
    let state = AppState::new(catalog, store);
    let app = create_router(state, &Settings::default());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr.to_string(), dir)
}
