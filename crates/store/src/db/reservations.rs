//! Reservation repository for database operations.

use lightbnb_core::UserId;
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::GuestReservation;

const GUEST_RESERVATIONS: &str = r"
    SELECT reservations.id, properties.title, properties.cost_per_night,
           reservations.start_date, avg(property_reviews.rating) AS average_rating
    FROM reservations
    JOIN properties ON reservations.property_id = properties.id
    JOIN property_reviews ON properties.id = property_reviews.property_id
    WHERE reservations.guest_id = $1
    GROUP BY properties.id, reservations.id
    ORDER BY reservations.start_date
    LIMIT $2
";

/// Repository for reservation database operations.
pub struct ReservationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepository<'a> {
    /// Create a new reservation repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Run the guest reservation query and keep only its first row.
    ///
    /// This is the long-standing behavior of the reservations accessor:
    /// despite the name, callers get the earliest reservation (or `None`).
    /// Use [`ReservationRepository::list_for_guest`] for every row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_all_for_guest(
        &self,
        guest_id: UserId,
        limit: u32,
    ) -> Result<Option<GuestReservation>, RepositoryError> {
        sqlx::query_as::<_, GuestReservation>(GUEST_RESERVATIONS)
            .bind(guest_id)
            .bind(i64::from(limit))
            .fetch_optional(self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, guest_id = %guest_id, "Error retrieving reservations");
                RepositoryError::Database(e)
            })
    }

    /// A guest's reservations, earliest first, at most `limit` of them.
    ///
    /// Reservations at properties without reviews are not returned.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_guest(
        &self,
        guest_id: UserId,
        limit: u32,
    ) -> Result<Vec<GuestReservation>, RepositoryError> {
        sqlx::query_as::<_, GuestReservation>(GUEST_RESERVATIONS)
            .bind(guest_id)
            .bind(i64::from(limit))
            .fetch_all(self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, guest_id = %guest_id, "Error listing reservations");
                RepositoryError::Database(e)
            })
    }
}
