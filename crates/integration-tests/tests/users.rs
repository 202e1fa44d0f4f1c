//! Integration tests for user lookups and inserts.
//!
//! Run with: `cargo test -p lightbnb-integration-tests -- --ignored`

#![allow(clippy::unwrap_used)]

use lightbnb_core::{Email, UserId};
use lightbnb_store::Database;
use lightbnb_store::models::NewUser;
use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
#[ignore = "Requires a running PostgreSQL (DATABASE_URL)"]
async fn test_get_by_email_ignores_case(pool: PgPool) {
    let db = Database::from_pool(pool);

    for spelling in [
        "Tristan.Jacobs@Gmail.com",
        "tristan.jacobs@gmail.com",
        "TRISTAN.JACOBS@GMAIL.COM",
    ] {
        let email = Email::parse(spelling).unwrap();
        let user = db.users().get_by_email(&email).await.unwrap().unwrap();
        assert_eq!(user.id, UserId::new(1));
        assert_eq!(user.name, "Tristan Jacobs");
        assert_eq!(user.email.as_str(), "Tristan.Jacobs@Gmail.com");
    }
}

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
#[ignore = "Requires a running PostgreSQL (DATABASE_URL)"]
async fn test_get_by_email_missing(pool: PgPool) {
    let db = Database::from_pool(pool);
    let email = Email::parse("nobody@example.com").unwrap();

    assert!(db.users().get_by_email(&email).await.unwrap().is_none());
}

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
#[ignore = "Requires a running PostgreSQL (DATABASE_URL)"]
async fn test_get_by_id(pool: PgPool) {
    let db = Database::from_pool(pool);

    let user = db.users().get_by_id(UserId::new(2)).await.unwrap().unwrap();
    assert_eq!(user.email.as_str(), "evastanley@example.com");
    assert_eq!(user.password.expose_secret(), "password-2");
}

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
#[ignore = "Requires a running PostgreSQL (DATABASE_URL)"]
async fn test_get_by_id_missing_is_none(pool: PgPool) {
    let db = Database::from_pool(pool);

    let result = db.users().get_by_id(UserId::new(999)).await;
    assert!(result.unwrap().is_none());
}

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
#[ignore = "Requires a running PostgreSQL (DATABASE_URL)"]
async fn test_create_returns_new_record(pool: PgPool) {
    let db = Database::from_pool(pool);
    let new_user = NewUser {
        name: "Kay Simmons".to_string(),
        email: Email::parse("kaysimmons@example.com").unwrap(),
        password: SecretString::from("correct horse"),
    };

    let created = db.users().create(&new_user).await.unwrap();
    assert_eq!(created.id, UserId::new(4));
    assert_eq!(created.name, "Kay Simmons");
    assert_eq!(created.email.as_str(), "kaysimmons@example.com");
    assert_eq!(created.password.expose_secret(), "correct horse");

    let fetched = db.users().get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.email, created.email);
}

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
#[ignore = "Requires a running PostgreSQL (DATABASE_URL)"]
async fn test_stored_bad_email_is_corruption(pool: PgPool) {
    sqlx::query("INSERT INTO users (name, email, password) VALUES ('Bad Row', 'not-an-email', 'x')")
        .execute(&pool)
        .await
        .unwrap();
    let db = Database::from_pool(pool);

    let err = db.users().get_by_id(UserId::new(4)).await.unwrap_err();
    assert!(matches!(err, lightbnb_store::RepositoryError::DataCorruption(_)));
}

#[sqlx::test(migrations = false, fixtures("schema"))]
#[ignore = "Requires a running PostgreSQL (DATABASE_URL)"]
async fn test_store_error_is_propagated(pool: PgPool) {
    sqlx::query("DROP TABLE property_reviews, reservations, properties, users")
        .execute(&pool)
        .await
        .unwrap();
    let db = Database::from_pool(pool);

    let err = db.users().get_by_id(UserId::new(1)).await.unwrap_err();
    assert!(matches!(err, lightbnb_store::RepositoryError::Database(_)));
}
