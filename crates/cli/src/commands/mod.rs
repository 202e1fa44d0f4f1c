//! Subcommand implementations.
//!
//! Each command runs one store accessor and prints its result to stdout as
//! pretty-printed JSON.

pub mod properties;
pub mod reservations;
pub mod users;

use serde::Serialize;
use thiserror::Error;

use lightbnb_store::RepositoryError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The store accessor failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Input or output JSON could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An input file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Arguments were inconsistent.
    #[error("Usage error: {0}")]
    Usage(String),
}

/// Print `value` to stdout as pretty JSON.
fn print_json<T: Serialize>(value: &T) -> Result<(), CommandError> {
    let json = serde_json::to_string_pretty(value)?;
    #[allow(clippy::print_stdout)]
    {
        println!("{json}");
    }
    Ok(())
}
