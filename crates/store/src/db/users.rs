//! User repository for database operations.

use lightbnb_core::{Email, UserId};
use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::{NewUser, User};

/// Raw `users` row before email validation.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: UserId,
    name: String,
    email: String,
    password: String,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: row.id,
            name: row.name,
            email,
            password: SecretString::from(row.password),
        })
    }
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a user by email, ignoring letter case.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, name, email, password
            FROM users
            WHERE LOWER(email) = LOWER($1)
            ",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, email = %email, "Error retrieving user by email");
            RepositoryError::Database(e)
        })?;

        row.map(User::try_from).transpose()
    }

    /// Get a user by ID.
    ///
    /// A row whose stored email no longer parses as an [`Email`] is reported
    /// as an error, not returned as a record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, name, email, password
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %id, "Error retrieving user by id");
            RepositoryError::Database(e)
        })?;

        row.map(User::try_from).transpose()
    }

    /// Insert a user and return the stored record with its new ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails, including
    /// constraint violations.
    pub async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            ",
        )
        .bind(&user.name)
        .bind(user.email.as_str())
        .bind(user.password.expose_secret())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, email = %user.email, "Error adding user");
            RepositoryError::Database(e)
        })?;

        let created = User::try_from(row)?;
        tracing::info!(user_id = %created.id, "User added");
        Ok(created)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn row(email: &str) -> UserRow {
        UserRow {
            id: UserId::new(1),
            name: "Devin Sanders".to_string(),
            email: email.to_string(),
            password: "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED/.JBIDRh70tGevYzYzQgFId2u.".to_string(),
        }
    }

    #[test]
    fn test_row_into_user() {
        let user = User::try_from(row("tristanjacobs@gmail.com")).unwrap();
        assert_eq!(user.id, UserId::new(1));
        assert_eq!(user.email.as_str(), "tristanjacobs@gmail.com");
        assert!(!format!("{user:?}").contains("FB/BOAV"));
    }

    #[test]
    fn test_row_with_bad_email_is_corruption() {
        let err = User::try_from(row("not-an-email")).unwrap_err();
        assert!(matches!(err, RepositoryError::DataCorruption(_)));
    }
}
