use anyhow::Context;
use gateway::catalog::SymbolCatalog;
use gateway::config::Settings;
use gateway::router::create_router;
use gateway::state::AppState;
use gateway::store::OrderStore;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting trading dashboard API service");

    let settings = Settings::from_env();

    // A missing or malformed catalog is fatal: no endpoint can serve
    // without symbol lookups.
    let catalog = SymbolCatalog::load(&settings.symbols_file)
        .context("failed to load symbol catalog")?;
    tracing::info!(symbols = catalog.len(), "symbol catalog loaded");

    let store = OrderStore::new(&settings.orders_dir);
    let state = AppState::new(catalog, store);

    // Create router
    let app = create_router(state, &settings);

    // Bind and serve
    let addr = settings.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
