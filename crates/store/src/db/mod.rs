//! Database operations for the LightBnB `PostgreSQL` store.
//!
//! # Tables
//!
//! - `users` - Guests and owners; email is the case-insensitive login key
//! - `properties` - Listings, each owned by a user
//! - `reservations` - Stays booked by a guest at a property
//! - `property_reviews` - Ratings, read here only as `avg(rating)`
//!
//! The schema is managed outside this crate. Every accessor runs exactly one
//! statement, logs a failure with its own message and returns the error
//! unchanged inside [`RepositoryError::Database`]. Nothing is retried.

pub mod properties;
pub mod reservations;
pub mod users;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use properties::PropertyRepository;
pub use reservations::ReservationRepository;
pub use users::UserRepository;

use crate::config::StoreConfig;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx, passed through verbatim.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored row failed domain validation.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `PostgreSQL` connection pool from `config`.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(config: &StoreConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(config.database_url.expose_secret())
        .await
}

/// Handle to the store.
///
/// Open one at process start with [`Database::connect`], hand out
/// repositories from it, and call [`Database::close`] at shutdown. Cloning is
/// cheap and shares the underlying pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect using `config`.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the connection cannot be established.
    pub async fn connect(config: &StoreConfig) -> Result<Self, sqlx::Error> {
        let pool = create_pool(config).await.inspect_err(|e| {
            tracing::error!(error = %e, "Error connecting to database");
        })?;
        tracing::info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Connected to database"
        );
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    #[must_use]
    pub const fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// User accessors.
    #[must_use]
    pub const fn users(&self) -> UserRepository<'_> {
        UserRepository::new(&self.pool)
    }

    /// Property accessors.
    #[must_use]
    pub const fn properties(&self) -> PropertyRepository<'_> {
        PropertyRepository::new(&self.pool)
    }

    /// Reservation accessors.
    #[must_use]
    pub const fn reservations(&self) -> ReservationRepository<'_> {
        ReservationRepository::new(&self.pool)
    }

    /// Close every pooled connection and wait for them to finish.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connections closed");
    }
}
