//! # Repository Module
//!
//! Storage access for the catalog, behind a trait the HTTP layer can depend on.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  store.add(&product)                                           │
//! │       ▼                                                                 │
//! │  ProductStore (trait)                                                  │
//! │  ├── add(&self, product)                                               │
//! │  ├── get_all(&self)                                                    │
//! │  ├── update(&self, product)                                            │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  implemented by                                                 │
//! │       ▼                                                                 │
//! │  ProductRepository ──► parameterized SQL ──► SQLite                    │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Handlers never see SQL or the pool                                  │
//! │  • Handler tests swap in an in-memory fake                             │
//! │  • SQL is isolated in one place                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;

use async_trait::async_trait;
use catalog_core::Product;

use crate::error::DbResult;

/// The four storage operations the service is built on.
///
/// Implementations must be safe to share across request handlers
/// (`Send + Sync`); the HTTP layer holds one behind an `Arc`.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persists a new product and returns the stored row.
    ///
    /// The store assigns the id; any id on the incoming value is ignored.
    async fn add(&self, product: &Product) -> DbResult<Product>;

    /// Returns every product, ordered by id.
    async fn get_all(&self) -> DbResult<Vec<Product>>;

    /// Rewrites the row whose id matches `product.id`.
    ///
    /// Matching no row is a successful no-op, not an error.
    async fn update(&self, product: &Product) -> DbResult<()>;

    /// Removes the row with the given id.
    ///
    /// Matching no row is a successful no-op, not an error.
    async fn delete(&self, id: i64) -> DbResult<()>;
}
