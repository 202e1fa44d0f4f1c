//! Property repository for database operations.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::{NewProperty, Property, PropertyListing};
use crate::search::{PropertyFilter, SearchQuery, bind_params};

/// Repository for property database operations.
pub struct PropertyRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepository<'a> {
    /// Create a new property repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find listings matching `filter`, cheapest first, at most `limit` of them.
    ///
    /// Only properties with at least one review are returned, since the
    /// rating is computed over an inner join.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn search(
        &self,
        filter: &PropertyFilter,
        limit: u32,
    ) -> Result<Vec<PropertyListing>, RepositoryError> {
        let query = SearchQuery::build(filter, limit);
        tracing::debug!(sql = query.sql(), params = ?query.params(), "Property search");

        let (sql, params) = query.into_parts();
        let listings = bind_params(sqlx::query_as::<_, PropertyListing>(&sql), params)
            .fetch_all(self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, ?filter, limit, "Error retrieving properties");
                RepositoryError::Database(e)
            })?;

        Ok(listings)
    }

    /// Insert a listing and return the stored record with its new ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails, including a
    /// missing owner.
    pub async fn create(&self, property: &NewProperty) -> Result<Property, RepositoryError> {
        let created = sqlx::query_as::<_, Property>(
            r"
            INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, street, city, province, post_code, country,
                parking_spaces, number_of_bathrooms, number_of_bedrooms
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING id, owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                      cost_per_night, street, city, province, post_code, country,
                      parking_spaces, number_of_bathrooms, number_of_bedrooms, active
            ",
        )
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(property.description.as_deref())
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(property.cost_per_night)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .bind(&property.country)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                error = %e,
                owner_id = %property.owner_id,
                title = %property.title,
                "Error adding new property"
            );
            RepositoryError::Database(e)
        })?;

        tracing::info!(property_id = %created.id, "Property added");
        Ok(created)
    }
}
