//! # catalog-core: Pure Domain Types for the Catalog Service
//!
//! This crate holds the domain vocabulary shared by the storage layer and the
//! HTTP API. It contains types and pure conversions only, with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Service Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  catalog-api (HTTP Layer)                       │   │
//! │  │        POST/GET/PUT /api/products, DELETE /api/products/{id}    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ catalog-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │        ┌────────────────┐      ┌────────────────┐              │   │
//! │  │        │     types      │      │     money      │              │   │
//! │  │        │    Product     │      │  Money (cents) │              │   │
//! │  │        └────────────────┘      └────────────────┘              │   │
//! │  │                                                                 │   │
//! │  │        NO I/O • NO DATABASE • NO NETWORK • PURE TYPES           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  catalog-db (Database Layer)                    │   │
//! │  │              SQLite pool, schema, ProductStore                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The `Product` entity
//! - [`money`] - Money type with integer arithmetic (no floating point storage!)
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every conversion is deterministic
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: Prices are cents (i64) internally; the JSON wire form
//!    stays a decimal number
//! 4. **Explicit Errors**: Parse failures are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use catalog_core::Money` instead of
// `use catalog_core::money::Money`

pub use money::{Money, ParseMoneyError};
pub use types::Product;
