//! Reservation commands.

use lightbnb_core::UserId;
use lightbnb_store::Database;

use super::{CommandError, print_json};

/// Print a guest's reservations.
///
/// Without `all`, prints the single row the reservations accessor returns
/// (or `null`).
pub async fn list(db: &Database, guest: UserId, limit: u32, all: bool) -> Result<(), CommandError> {
    let repo = db.reservations();
    if all {
        let reservations = repo.list_for_guest(guest, limit).await?;
        tracing::info!(guest_id = %guest, count = reservations.len(), "Reservations loaded");
        print_json(&reservations)
    } else {
        print_json(&repo.get_all_for_guest(guest, limit).await?)
    }
}
