//! Nightly price of a listing.
//!
//! `properties.cost_per_night` is an `INTEGER` column holding cents. The
//! search filters compare against the same column, so minimum and maximum
//! price filters are expressed in the same unit.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in cents.
///
/// Serializes as the bare integer so records round-trip unchanged through
/// JSON callers.
///
/// ```
/// use lightbnb_core::Price;
///
/// let price = Price::from_cents(93_061);
/// assert_eq!(price.to_string(), "$930.61");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type), sqlx(transparent))]
pub struct Price(i32);

impl Price {
    /// Create a price from a cent amount.
    #[must_use]
    pub const fn from_cents(cents: i32) -> Self {
        Self(cents)
    }

    /// Get the amount in cents.
    #[must_use]
    pub const fn cents(&self) -> i32 {
        self.0
    }

    /// Get the amount in whole currency units (e.g. dollars).
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 2)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.to_decimal())
    }
}

impl From<i32> for Price {
    fn from(cents: i32) -> Self {
        Self(cents)
    }
}
