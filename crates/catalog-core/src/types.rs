//! # Domain Types
//!
//! The catalog's single entity and its wire/storage mapping.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Product                                       │
//! │                                                                         │
//! │   JSON body                    struct                 products table    │
//! │   ─────────────────────        ──────────────         ───────────────   │
//! │   "id": 3 (optional)      ◄──► id: i64           ◄──► id INTEGER PK     │
//! │   "name": "Pen"           ◄──► name: String      ◄──► name TEXT         │
//! │   "description": "..."    ◄──► description: ...  ◄──► description TEXT  │
//! │   "price": 1.5            ◄──► price: Money      ◄──► price_cents INT   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product record in the catalog.
///
/// The same shape is used for request bodies, response bodies, and database
/// rows. Create payloads may omit `id`; the store assigns the real one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Row id assigned by the store. Defaults to 0 when a payload omits it;
    /// the stored value always wins on create.
    #[serde(default)]
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Unit price. Rides the wire as a decimal number, lives in the
    /// `price_cents` column as integer cents.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "price_cents"))]
    pub price: Money,
}

impl Product {
    /// Builds an unsaved product (id 0). Used by callers that create records;
    /// the store fills in the id.
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Money) -> Self {
        Product {
            id: 0,
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
