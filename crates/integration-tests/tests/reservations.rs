//! Integration tests for guest reservation lookups.
//!
//! Run with: `cargo test -p lightbnb-integration-tests -- --ignored`

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use lightbnb_core::{Price, ReservationId, UserId};
use lightbnb_integration_tests::BUSY_GUEST;
use lightbnb_store::Database;
use lightbnb_store::search::DEFAULT_LIMIT;
use rust_decimal::Decimal;
use sqlx::PgPool;

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
#[ignore = "Requires a running PostgreSQL (DATABASE_URL)"]
async fn test_get_all_for_guest_returns_first_row(pool: PgPool) {
    let db = Database::from_pool(pool);

    let reservation = db
        .reservations()
        .get_all_for_guest(BUSY_GUEST, DEFAULT_LIMIT)
        .await
        .unwrap()
        .unwrap();

    // Earliest reviewed stay; reservation 4 is earlier but its property has no reviews
    assert_eq!(reservation.id, ReservationId::new(2));
    assert_eq!(reservation.title, "Blank corner");
    assert_eq!(reservation.cost_per_night, Price::from_cents(8_523));
    assert_eq!(
        reservation.start_date,
        NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()
    );
    assert_eq!(reservation.average_rating, Some(Decimal::from(3)));
}

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
#[ignore = "Requires a running PostgreSQL (DATABASE_URL)"]
async fn test_get_all_for_guest_without_reservations(pool: PgPool) {
    let db = Database::from_pool(pool);

    let reservation = db
        .reservations()
        .get_all_for_guest(UserId::new(999), DEFAULT_LIMIT)
        .await
        .unwrap();
    assert!(reservation.is_none());
}

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
#[ignore = "Requires a running PostgreSQL (DATABASE_URL)"]
async fn test_list_for_guest_orders_by_start_date(pool: PgPool) {
    let db = Database::from_pool(pool);

    let reservations = db
        .reservations()
        .list_for_guest(BUSY_GUEST, DEFAULT_LIMIT)
        .await
        .unwrap();

    let ids: Vec<i32> = reservations.iter().map(|r| r.id.as_i32()).collect();
    assert_eq!(ids, vec![2, 3, 1]);
    assert_eq!(
        reservations.last().unwrap().average_rating,
        Some(Decimal::new(45, 1))
    );
}

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
#[ignore = "Requires a running PostgreSQL (DATABASE_URL)"]
async fn test_list_for_guest_respects_limit(pool: PgPool) {
    let db = Database::from_pool(pool);

    let reservations = db
        .reservations()
        .list_for_guest(BUSY_GUEST, 2)
        .await
        .unwrap();

    let ids: Vec<i32> = reservations.iter().map(|r| r.id.as_i32()).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[sqlx::test(migrations = false, fixtures("schema"))]
#[ignore = "Requires a running PostgreSQL (DATABASE_URL)"]
async fn test_reservation_errors_are_propagated(pool: PgPool) {
    sqlx::query("DROP TABLE property_reviews")
        .execute(&pool)
        .await
        .unwrap();
    let db = Database::from_pool(pool);
    let reservations = db.reservations();

    let first = reservations.get_all_for_guest(BUSY_GUEST, DEFAULT_LIMIT).await;
    assert!(matches!(
        first,
        Err(lightbnb_store::RepositoryError::Database(_))
    ));

    let all = reservations.list_for_guest(BUSY_GUEST, DEFAULT_LIMIT).await;
    assert!(matches!(
        all,
        Err(lightbnb_store::RepositoryError::Database(_))
    ));
}
