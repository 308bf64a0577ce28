//! # Money Module
//!
//! Provides the `Money` type for handling product prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Stored as a binary double:                                             │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A price written to disk as a REAL may read back as 1.4999999999...     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "1.50" on the wire ──► Money(150) ──► price_cents INTEGER column     │
//! │    Every hop is exact; only (de)serialization touches a double, and     │
//! │    cents-sized values are exactly representable there                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//!
//! JSON clients see a plain decimal number, never a cents integer:
//!
//! ```json
//! { "name": "Pen", "description": "A nice pen", "price": 1.5 }
//! ```
//!
//! Incoming numbers are rounded to the nearest cent; sub-cent precision is
//! not part of the contract.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: keeps arithmetic total; callers decide whether a
///   negative price is meaningful
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Transparent sqlx type** (behind the `sqlx` feature): binds directly as
///   an SQLite `INTEGER`, so the database never sees a float
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::money::Money;
    ///
    /// let price = Money::from_cents(150); // 1.50
    /// assert_eq!(price.cents(), 150);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }
}

// =============================================================================
// Display / Parse
// =============================================================================

/// Renders as a plain decimal with two fraction digits: `1.50`, `-0.07`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

/// Errors from parsing a decimal price string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMoneyError {
    /// The input was empty or contained no digits.
    #[error("empty price string")]
    Empty,

    /// A character other than digits, one `.`, or a leading `-` was found.
    #[error("invalid character in price string")]
    InvalidCharacter,

    /// More than two fraction digits were supplied.
    #[error("prices support at most two fraction digits")]
    TooPrecise,

    /// The value does not fit in 64-bit cents.
    #[error("price out of range")]
    OutOfRange,
}

/// Exact decimal parsing: `"1.50"` -> 150 cents, `"2"` -> 200 cents.
///
/// Unlike the serde path (which accepts any JSON number and rounds), this
/// parser is strict: more than two fraction digits is an error, not a
/// rounding.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (major, minor) = match unsigned.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (unsigned, ""),
        };

        if major.is_empty() && minor.is_empty() {
            return Err(ParseMoneyError::Empty);
        }
        if !major.bytes().all(|b| b.is_ascii_digit()) || !minor.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ParseMoneyError::InvalidCharacter);
        }
        if minor.len() > 2 {
            return Err(ParseMoneyError::TooPrecise);
        }

        let major: i64 = if major.is_empty() {
            0
        } else {
            major.parse().map_err(|_| ParseMoneyError::OutOfRange)?
        };
        // "1.5" means 50 cents, not 5
        let minor: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| ParseMoneyError::OutOfRange)? * 10,
            _ => minor.parse().map_err(|_| ParseMoneyError::OutOfRange)?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or(ParseMoneyError::OutOfRange)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Serde Wire Format
// =============================================================================

/// Serializes as a decimal number (`1.5`), not as raw cents.
///
/// Cents-sized magnitudes are exactly representable as f64, so the division
/// never loses a cent.
impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CentsVisitor)
    }
}

/// Accepts any JSON number and snaps it to the nearest cent.
struct CentsVisitor;

impl<'de> Visitor<'de> for CentsVisitor {
    type Value = Money;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a price as a decimal number")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Money, E>
    where
        E: de::Error,
    {
        value
            .checked_mul(100)
            .map(Money)
            .ok_or_else(|| E::custom("price out of range"))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Money, E>
    where
        E: de::Error,
    {
        i64::try_from(value)
            .ok()
            .and_then(|v| v.checked_mul(100))
            .map(Money)
            .ok_or_else(|| E::custom("price out of range"))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Money, E>
    where
        E: de::Error,
    {
        if !value.is_finite() {
            return Err(E::custom("price must be a finite number"));
        }
        let cents = (value * 100.0).round();
        // i64::MAX as f64 rounds up, so compare exclusively on both ends
        if cents >= i64::MAX as f64 || cents <= i64::MIN as f64 {
            return Err(E::custom("price out of range"));
        }
        Ok(Money(cents as i64))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
