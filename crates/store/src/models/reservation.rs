//! Reservation records.

use chrono::NaiveDate;
use lightbnb_core::{Price, ReservationId};
use rust_decimal::Decimal;
use serde::Serialize;

/// A guest's reservation joined with the reserved property and its rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct GuestReservation {
    /// Reservation ID.
    pub id: ReservationId,
    /// Title of the reserved property.
    pub title: String,
    /// Nightly cost of the reserved property.
    pub cost_per_night: Price,
    /// First night of the stay.
    pub start_date: NaiveDate,
    /// Mean review rating of the property.
    pub average_rating: Option<Decimal>,
}
