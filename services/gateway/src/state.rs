use crate::catalog::SymbolCatalog;
use crate::orders::OrderService;
use crate::store::OrderStore;
use crate::ticks::TickGenerator;
use std::sync::Arc;

/// Shared application state, cloned per connection task.
///
/// The catalog is built once at startup and injected read-only into
/// every component needing symbol lookups; there is no global mutable
/// catalog state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<SymbolCatalog>,
    pub orders: Arc<OrderService>,
    pub ticker: TickGenerator,
}

impl AppState {
    pub fn new(catalog: SymbolCatalog, store: OrderStore) -> Self {
        let catalog = Arc::new(catalog);
        let store = Arc::new(store);

        Self {
            orders: Arc::new(OrderService::new(catalog.clone(), store)),
            ticker: TickGenerator::new(catalog.clone()),
            catalog,
        }
    }
}
