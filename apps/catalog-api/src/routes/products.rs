//! # Product Handlers
//!
//! The four CRUD handlers behind `/api/products`.
//!
//! ## Request Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  JSON body ──► Json<Product> extractor ──► handler ──► ProductStore    │
//! │                     │                          │                        │
//! │                     │ malformed? 4xx           │ DbError? ApiError      │
//! │                     ▼                          ▼   (503 / 500)          │
//! │                  rejection                 response                     │
//! │                                                                         │
//! │  create ──► 201 + stored row (the id the store assigned, not the       │
//! │             one the client sent)                                        │
//! │  list   ──► 200 + every row, ordered by id                             │
//! │  update ──► 204 (row absent: nothing happens, still 204)               │
//! │  delete ──► 204 (row absent: nothing happens, still 204)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use catalog_core::Product;

use crate::error::ApiError;
use crate::AppState;

/// `POST /api/products`
///
/// Persists the body as a new record and echoes the stored row back, so the
/// client learns the real id.
pub async fn create_product(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    debug!(name = %product.name, "Create product");
    let created = state.store.add(&product).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/products`
///
/// The full catalog, ordered by id. An empty store yields `[]`, not an error.
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.store.get_all().await?;
    Ok(Json(products))
}

/// `PUT /api/products`
///
/// Rewrites the row named by the body's `id`. A missing row is a successful
/// no-op; either way the client gets 204.
pub async fn update_product(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<StatusCode, ApiError> {
    debug!(id = product.id, "Update product");
    state.store.update(&product).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/products/{id}`
///
/// Removes the row. Deleting an absent id is a successful no-op, so the
/// operation is idempotent from the client's point of view.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    debug!(id, "Delete product");
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Handler Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use axum::Router;
    use serde_json::{json, Value};
    use tokio::sync::Mutex;
    use tower::ServiceExt;

    use catalog_core::Money;
    use catalog_db::{DbError, DbResult, ProductStore};

    use crate::routes;

    // -------------------------------------------------------------------------
    // Fake stores
    // -------------------------------------------------------------------------

    /// In-memory store with the same observable behavior as the SQLite one:
    /// ids are assigned on add, mutations on absent ids are no-ops.
    #[derive(Default)]
    struct MemoryStore {
        rows: Mutex<Vec<Product>>,
    }

    #[async_trait]
    impl ProductStore for MemoryStore {
        async fn add(&self, product: &Product) -> DbResult<Product> {
            let mut rows = self.rows.lock().await;
            let id = rows.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            let stored = Product {
                id,
                ..product.clone()
            };
            rows.push(stored.clone());
            Ok(stored)
        }

        async fn get_all(&self) -> DbResult<Vec<Product>> {
            let mut rows = self.rows.lock().await.clone();
            rows.sort_by_key(|p| p.id);
            Ok(rows)
        }

        async fn update(&self, product: &Product) -> DbResult<()> {
            let mut rows = self.rows.lock().await;
            if let Some(row) = rows.iter_mut().find(|p| p.id == product.id) {
                *row = product.clone();
            }
            Ok(())
        }

        async fn delete(&self, id: i64) -> DbResult<()> {
            self.rows.lock().await.retain(|p| p.id != id);
            Ok(())
        }
    }

    /// Store whose every operation fails with the error the factory produces.
    struct FailingStore(fn() -> DbError);

    #[async_trait]
    impl ProductStore for FailingStore {
        async fn add(&self, _product: &Product) -> DbResult<Product> {
            Err((self.0)())
        }

        async fn get_all(&self) -> DbResult<Vec<Product>> {
            Err((self.0)())
        }

        async fn update(&self, _product: &Product) -> DbResult<()> {
            Err((self.0)())
        }

        async fn delete(&self, _id: i64) -> DbResult<()> {
            Err((self.0)())
        }
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn memory_app() -> (Arc<MemoryStore>, Router) {
        let store = Arc::new(MemoryStore::default());
        let app = routes::app(AppState {
            store: store.clone(),
        });
        (store, app)
    }

    fn failing_app(factory: fn() -> DbError) -> Router {
        routes::app(AppState {
            store: Arc::new(FailingStore(factory)),
        })
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn pen_body() -> Value {
        json!({ "name": "Pen", "description": "A nice blue pen", "price": 1.5 })
    }

    // -------------------------------------------------------------------------
    // Tests
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_health_endpoint() {
        let (_, app) = memory_app();

        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_create_returns_201_with_stored_row() {
        let (_, app) = memory_app();

        let response = app
            .oneshot(json_request(Method::POST, "/api/products", pen_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({ "id": 1, "name": "Pen", "description": "A nice blue pen", "price": 1.5 })
        );
    }

    #[tokio::test]
    async fn test_create_ignores_client_supplied_id() {
        let (_, app) = memory_app();

        let mut body = pen_body();
        body["id"] = json!(999);

        let response = app
            .oneshot(json_request(Method::POST, "/api/products", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await["id"], json!(1));
    }

    #[tokio::test]
    async fn test_list_empty_store_returns_empty_array() {
        let (_, app) = memory_app();

        let response = app.oneshot(get_request("/api/products")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"[]");
    }

    #[tokio::test]
    async fn test_list_returns_products_in_id_order() {
        let (store, app) = memory_app();

        store
            .add(&Product::new("Pen", "Blue", Money::from_cents(150)))
            .await
            .unwrap();
        store
            .add(&Product::new("Pencil", "HB", Money::from_cents(75)))
            .await
            .unwrap();

        let response = app.oneshot(get_request("/api/products")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(
            body,
            json!([
                { "id": 1, "name": "Pen", "description": "Blue", "price": 1.5 },
                { "id": 2, "name": "Pencil", "description": "HB", "price": 0.75 },
            ])
        );
    }

    #[tokio::test]
    async fn test_update_returns_204_and_rewrites_row() {
        let (store, app) = memory_app();

        let stored = store
            .add(&Product::new("Pen", "Blue", Money::from_cents(150)))
            .await
            .unwrap();

        let body = json!({
            "id": stored.id,
            "name": "Pen",
            "description": "Blue",
            "price": 1.75,
        });
        let response = app
            .oneshot(json_request(Method::PUT, "/api/products", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].price, Money::from_cents(175));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_a_silent_204() {
        let (store, app) = memory_app();

        let mut body = pen_body();
        body["id"] = json!(42);

        let response = app
            .oneshot(json_request(Method::PUT, "/api/products", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_returns_204_and_removes_row() {
        let (store, app) = memory_app();

        let stored = store
            .add(&Product::new("Pen", "Blue", Money::from_cents(150)))
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri(format!("/api/products/{}", stored.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent_over_http() {
        let (_, app) = memory_app();

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method(Method::DELETE)
                        .uri("/api/products/7")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::NO_CONTENT);
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_client_error() {
        let (_, app) = memory_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/products")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_string_price_is_a_client_error() {
        let (_, app) = memory_app();

        let body = json!({ "name": "Pen", "description": "Blue", "price": "1.50" });
        let response = app
            .oneshot(json_request(Method::POST, "/api/products", body))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_statement_failure_maps_to_500() {
        let app = failing_app(|| DbError::QueryFailed("NOT NULL constraint failed".into()));

        let response = app
            .oneshot(json_request(Method::POST, "/api/products", pen_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["code"], json!("DATABASE_ERROR"));
        // engine details stay in the log, not the body
        assert!(!body["message"].as_str().unwrap().contains("constraint"));
    }

    #[tokio::test]
    async fn test_unreachable_store_maps_to_503() {
        let app = failing_app(|| DbError::PoolExhausted);

        let response = app.oneshot(get_request("/api/products")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await["code"], json!("STORE_UNAVAILABLE"));
    }

    /// Same handlers, real storage: the router wired to an in-memory SQLite
    /// database instead of the fake.
    #[tokio::test]
    async fn test_create_and_list_against_sqlite() {
        use catalog_db::{Database, DbConfig};

        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let app = routes::app(AppState {
            store: Arc::new(db.products()),
        });

        let response = app
            .clone()
            .oneshot(json_request(Method::POST, "/api/products", pen_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await["id"], json!(1));

        let response = app.oneshot(get_request("/api/products")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let listed = body_json(response).await;
        assert_eq!(listed[0]["name"], json!("Pen"));
        assert_eq!(listed[0]["price"], json!(1.5));
    }

    /// A price correction as a client would drive it: create at 1.50, read it
    /// back, send the corrected record, read again, then delete.
    #[tokio::test]
    async fn test_pen_price_correction_scenario() {
        let (_, app) = memory_app();

        let response = app
            .clone()
            .oneshot(json_request(Method::POST, "/api/products", pen_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["price"], json!(1.5));

        let mut corrected = created.clone();
        corrected["price"] = json!(1.75);
        let response = app
            .clone()
            .oneshot(json_request(Method::PUT, "/api/products", corrected))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app.clone().oneshot(get_request("/api/products")).await.unwrap();
        let listed = body_json(response).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["price"], json!(1.75));
        assert_eq!(listed[0]["id"], created["id"]);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri(format!("/api/products/{}", created["id"]))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app.oneshot(get_request("/api/products")).await.unwrap();
        assert_eq!(body_json(response).await, json!([]));
    }
}
