//! # catalog-db: Database Layer for the Catalog Service
//!
//! This crate provides storage for product records. It uses SQLite in a local
//! file with sqlx for async access.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Service Data Flow                          │
//! │                                                                         │
//! │  HTTP handler (create_product, list_products, ...)                     │
//! │       │                                                                 │
//! │       │  store.add(&product)        (ProductStore trait)               │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    catalog-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌─────────────┐  │   │
//! │  │   │   Database    │    │  Repository    │    │   Schema    │  │   │
//! │  │   │   (pool.rs)   │    │ (product.rs)   │    │ (schema.rs) │  │   │
//! │  │   │               │    │                │    │             │  │   │
//! │  │   │ SqlitePool    │◄───│ ProductStore   │    │ CREATE      │  │   │
//! │  │   │ WAL + rwc     │    │ impl           │    │ TABLE IF    │  │   │
//! │  │   │               │    │                │    │ NOT EXISTS  │  │   │
//! │  │   └───────────────┘    └────────────────┘    └─────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (catalog.db)                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`schema`] - Idempotent table bootstrap
//! - [`error`] - Database error types
//! - [`repository`] - The `ProductStore` trait and its SQLite implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_db::{Database, DbConfig, ProductStore};
//!
//! let db = Database::new(DbConfig::new("catalog.db")).await?;
//! let created = db.products().add(&product).await?;
//! let all = db.products().get_all().await?;
//! ```
//!
//! Every call checks a connection out of the pool for just the statement it
//! runs; nothing holds a connection across calls.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::product::ProductRepository;
pub use repository::ProductStore;
