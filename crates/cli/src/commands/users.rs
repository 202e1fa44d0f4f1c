//! User commands.

use lightbnb_core::{Email, UserId};
use lightbnb_store::Database;
use lightbnb_store::models::NewUser;
use secrecy::SecretString;

use super::{CommandError, print_json};

/// Print the user with `email`, or `null` if there is none.
pub async fn get_by_email(db: &Database, email: &Email) -> Result<(), CommandError> {
    let user = db.users().get_by_email(email).await?;
    if user.is_none() {
        tracing::info!(%email, "No user with that email");
    }
    print_json(&user)
}

/// Print the user with `id`, or `null` if there is none.
pub async fn get_by_id(db: &Database, id: UserId) -> Result<(), CommandError> {
    let user = db.users().get_by_id(id).await?;
    if user.is_none() {
        tracing::info!(user_id = %id, "No user with that id");
    }
    print_json(&user)
}

/// Insert a user and print the stored record.
pub async fn add(
    db: &Database,
    name: String,
    email: Email,
    password: String,
) -> Result<(), CommandError> {
    let new_user = NewUser {
        name,
        email,
        password: SecretString::from(password),
    };
    let user = db.users().create(&new_user).await?;
    print_json(&user)
}
