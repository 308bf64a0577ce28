//! # Catalog API
//!
//! HTTP server exposing product CRUD over a file-based SQLite store.
//!
//! ## Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Catalog API Surface                            │
//! │                                                                         │
//! │  POST   /api/products        create  → 201 + stored row                │
//! │  GET    /api/products        list    → 200 + array (ordered by id)     │
//! │  PUT    /api/products        update  → 204 (missing id: no-op)         │
//! │  DELETE /api/products/{id}   delete  → 204 (missing id: no-op)         │
//! │  GET    /health              liveness → 200                            │
//! │                                                                         │
//! │  Failures:                                                              │
//! │    store unreachable  → 503 { "code": "STORE_UNAVAILABLE", ... }       │
//! │    statement failed   → 500 { "code": "DATABASE_ERROR", ... }          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `DATABASE_PATH` - SQLite file path (default: catalog.db)
//! - `HTTP_HOST` - Bind address (default: 0.0.0.0)
//! - `HTTP_PORT` - Listen port (default: 8080)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `RUST_LOG` - Log filter (default: info)

pub mod config;
pub mod error;
pub mod routes;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;

use std::sync::Arc;

use catalog_db::ProductStore;

/// Shared application state.
///
/// Handlers depend on the [`ProductStore`] trait, not the SQLite repository,
/// so tests can inject an in-memory fake.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}
