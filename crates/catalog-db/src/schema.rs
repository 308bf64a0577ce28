//! # Schema Bootstrap
//!
//! The single-table schema, created on connect.
//!
//! ## How Bootstrap Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Startup Sequence                                   │
//! │                                                                         │
//! │  Database::new(config)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Open / create SQLite file (mode=rwc)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CREATE TABLE IF NOT EXISTS products (...)                             │
//! │       │                                                                 │
//! │       ├── Table exists?  → statement is a no-op                        │
//! │       └── Fresh file?    → table is created                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Service starts answering requests                                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no migration tracking here. The schema is one table, and the
//! bootstrap is idempotent; versioned migrations can replace this module if
//! the schema ever grows.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{DbError, DbResult};

/// The products table.
///
/// `price_cents` stores integer cents; the decimal wire form never reaches
/// the database.
const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT    NOT NULL,
    description TEXT    NOT NULL,
    price_cents INTEGER NOT NULL
)
"#;

/// Creates the products table when it is missing.
///
/// Safe to run on every connect; an existing table is left untouched.
/// A failure here is reported as [`DbError::SchemaFailed`] and treated as
/// fatal by the callers that start the service.
pub async fn initialize(pool: &SqlitePool) -> DbResult<()> {
    sqlx::query(CREATE_PRODUCTS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| DbError::SchemaFailed(e.to_string()))?;

    info!("Product table ready");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        // Database::new already ran initialize once; run it again
        initialize(db.pool()).await.unwrap();
        initialize(db.pool()).await.unwrap();

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'products'",
        )
        .fetch_one(db.pool())
        .await
        .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_bootstrap_preserves_existing_rows() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        sqlx::query("INSERT INTO products (name, description, price_cents) VALUES ('Pen', 'x', 150)")
            .execute(db.pool())
            .await
            .unwrap();

        initialize(db.pool()).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
