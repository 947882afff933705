//! Rutas HTTP
//!
//! Router completo del servicio: búsqueda, localidades, resultados y health.

pub mod location_routes;
pub mod results_routes;
pub mod search_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Crear el router principal con su estado
pub fn create_router(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/health", get(health))
        .nest("/api", search_routes::create_search_router())
        .nest("/api", location_routes::create_location_router())
        .merge(results_routes::create_results_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Endpoint de estado
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "rental-search",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
