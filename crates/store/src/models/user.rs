//! User records.

use lightbnb_core::{Email, UserId};
use secrecy::SecretString;
use serde::Serialize;

/// A LightBnB user.
///
/// The password is an opaque credential; this layer stores and returns it
/// without hashing. It is never serialized and `Debug` prints it redacted.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email, matched case-insensitively.
    pub email: Email,
    /// Stored credential.
    #[serde(skip_serializing)]
    pub password: SecretString,
}

/// Fields required to insert a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
    pub password: SecretString,
}
