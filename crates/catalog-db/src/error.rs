//! # Database Error Types
//!
//! Error types for storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Categorizes: unreachable vs statement failure │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in catalog-api) ← Maps to 503 / 500 + JSON body             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Client sees a stable error code; details stay in the server log       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note the taxonomy has no "not found" variant: mutating a row that does not
//! exist is a successful no-op in this service, not an error.

use thiserror::Error;

/// Storage operation errors.
///
/// These wrap sqlx errors and sort them into the two categories the HTTP
/// layer cares about: the store is unreachable, or a statement failed.
#[derive(Debug, Error)]
pub enum DbError {
    /// Could not reach or open the database.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Pool is closed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Table bootstrap failed at startup.
    ///
    /// ## When This Occurs
    /// - CREATE TABLE rejected (corrupt file, read-only volume)
    ///
    /// Fatal: the service refuses to start without its table.
    #[error("schema bootstrap failed: {0}")]
    SchemaFailed(String),

    /// A statement was rejected by the engine.
    ///
    /// ## When This Occurs
    /// - Constraint violation
    /// - Runtime SQL error
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use past the acquire timeout).
    #[error("connection pool exhausted")]
    PoolExhausted,

    /// Anything sqlx reports that fits none of the above.
    #[error("internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// True when the failure means the store itself is unreachable, as
    /// opposed to one statement going wrong.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, DbError::ConnectionFailed(_) | DbError::PoolExhausted)
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → DbError::QueryFailed
/// sqlx::Error::Io             → DbError::ConnectionFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),

            sqlx::Error::Io(io_err) => DbError::ConnectionFailed(io_err.to_string()),

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for storage operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================
