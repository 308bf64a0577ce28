//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Error Flow to the Client                           │
//! │                                                                         │
//! │  Handler                                                                │
//! │  Result<T, ApiError>                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError::ConnectionFailed / PoolExhausted                              │
//! │       │        → 503 { "code": "STORE_UNAVAILABLE", ... }               │
//! │       ▼                                                                 │
//! │  DbError::QueryFailed / SchemaFailed / Internal                         │
//! │                → 500 { "code": "DATABASE_ERROR", ... }                  │
//! │                                                                         │
//! │  The full error is written to the server log; the client body carries   │
//! │  a stable code and a generic message, never engine details.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use catalog_db::DbError;

/// Error returned from HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Storage failed underneath a handler.
    #[error(transparent)]
    Store(#[from] DbError),
}

/// JSON body attached to every error status.
///
/// ```json
/// { "code": "STORE_UNAVAILABLE", "message": "The product store is unreachable" }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code for programmatic handling
    pub code: &'static str,

    /// Human-readable message safe to show a client
    pub message: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Store(err) if err.is_unavailable() => {
                tracing::error!(error = %err, "Product store unreachable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "STORE_UNAVAILABLE",
                    "The product store is unreachable",
                )
            }
            // Log the actual error but return a generic message
            ApiError::Store(err) => {
                tracing::error!(error = %err, "Store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "The operation could not be completed",
                )
            }
        };

        (status, Json(ErrorBody { code, message })).into_response()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
