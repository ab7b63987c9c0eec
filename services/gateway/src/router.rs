use crate::config::Settings;
use crate::handlers::{health, orders, symbols, ws};
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState, settings: &Settings) -> Router {
    let api_routes = Router::new()
        .route("/symbols", get(symbols::list_symbols))
        .route("/orders", post(orders::create_order).get(orders::list_orders));

    Router::new()
        .nest("/api", api_routes)
        .route("/ws/ticks", get(ws::ws_handler))
        .route("/health", get(health::health))
        .layer(cors_layer(settings))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS layer from the configured origin list; `*` permits any origin.
fn cors_layer(settings: &Settings) -> CorsLayer {
    let origin = if settings.allows_any_origin() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            settings
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
