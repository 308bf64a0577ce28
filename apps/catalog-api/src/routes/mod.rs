//! # HTTP Routes
//!
//! Router assembly for the catalog service.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            Routing Table                                │
//! │                                                                         │
//! │  /api/products        GET  ──► products::list_products                 │
//! │                       POST ──► products::create_product                │
//! │                       PUT  ──► products::update_product                │
//! │  /api/products/{id}   DELETE ─► products::delete_product               │
//! │  /health              GET  ──► health (liveness, no store access)      │
//! │                                                                         │
//! │  Every request passes through TraceLayer for request/response logs.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod products;

use axum::routing::{delete, get};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Builds the application router over the given state.
///
/// Tests call this with a fake store; `main` calls it with the SQLite one.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/products",
            get(products::list_products)
                .post(products::create_product)
                .put(products::update_product),
        )
        .route("/api/products/{id}", delete(products::delete_product))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe. Answers as long as the process is up; it deliberately
/// does not touch the store.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
