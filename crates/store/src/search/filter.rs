//! Caller-supplied search criteria.

use lightbnb_core::{Price, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of listings returned when the caller does not ask for a limit.
pub const DEFAULT_LIMIT: u32 = 10;

/// Optional criteria narrowing a property search.
///
/// Every field is optional and absent fields deserialize to `None`, so the
/// filter can be read straight from a query string or JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyFilter {
    /// Substring of the city name. Matched case-sensitively with `LIKE`.
    pub city: Option<String>,
    /// Only listings owned by this user.
    pub owner_id: Option<UserId>,
    /// Lower price bound; ignored unless the upper bound is also set.
    pub minimum_price_per_night: Option<Price>,
    /// Upper price bound; ignored unless the lower bound is also set.
    pub maximum_price_per_night: Option<Price>,
    /// Lowest acceptable mean review rating.
    pub minimum_rating: Option<Decimal>,
}

impl PropertyFilter {
    /// The city criterion, treating an empty string as unset.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref().filter(|city| !city.is_empty())
    }

    /// The price range, present only when both bounds are.
    ///
    /// A bound of zero cents is a real bound, so `0..=max` yields
    /// `BETWEEN 0 AND max` rather than dropping the range.
    #[must_use]
    pub const fn price_range(&self) -> Option<(Price, Price)> {
        match (self.minimum_price_per_night, self.maximum_price_per_night) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }

    /// Whether no criterion would produce a predicate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.city().is_none()
            && self.owner_id.is_none()
            && self.price_range().is_none()
            && self.minimum_rating.is_none()
    }
}
