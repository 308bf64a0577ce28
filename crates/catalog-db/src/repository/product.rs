//! # Product Repository
//!
//! SQLite implementation of [`ProductStore`].
//!
//! ## Statements
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add      INSERT INTO products (name, description, price_cents)         │
//! │           VALUES (?1, ?2, ?3)            → last_insert_rowid() is the   │
//! │                                            id the caller gets back      │
//! │                                                                         │
//! │  get_all  SELECT ... FROM products ORDER BY id                          │
//! │                                                                         │
//! │  update   UPDATE products SET name = ?2, description = ?3,              │
//! │           price_cents = ?4 WHERE id = ?1 → 0 rows affected is fine      │
//! │                                                                         │
//! │  delete   DELETE FROM products WHERE id = ?1                            │
//! │                                          → 0 rows affected is fine      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every value reaches the engine through a bound parameter; no SQL is ever
//! assembled from request strings.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use catalog_core::Product;

use crate::error::DbResult;
use crate::repository::ProductStore;

/// Repository for product rows.
///
/// Holds a pool handle, not a connection: each method checks a connection
/// out for the single statement it runs, then releases it.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Number of rows in the table. Used by the seed tool and tests.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn add(&self, product: &Product) -> DbResult<Product> {
        let result = sqlx::query(
            "INSERT INTO products (name, description, price_cents) VALUES (?1, ?2, ?3)",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, name = %product.name, "Inserted product");

        Ok(Product {
            id,
            ..product.clone()
        })
    }

    async fn get_all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price_cents FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    async fn update(&self, product: &Product) -> DbResult<()> {
        let result = sqlx::query(
            "UPDATE products SET name = ?2, description = ?3, price_cents = ?4 WHERE id = ?1",
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            debug!(id = product.id, "Update matched no row");
        } else {
            debug!(id = product.id, "Updated product");
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!(id, "Delete matched no row");
        } else {
            debug!(id, "Deleted product");
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
