//! LightBnB store - `PostgreSQL` accessors for the rental listing app.
//!
//! Route handlers (or the `lightbnb` CLI) call these with plain data and get
//! plain records back:
//!
//! - [`db::UserRepository`] - look up users by email or ID, add users
//! - [`db::PropertyRepository`] - filtered listing search, add listings
//! - [`db::ReservationRepository`] - a guest's reservations
//!
//! Open a [`db::Database`] from a [`config::StoreConfig`] once at startup and
//! borrow repositories from it.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod models;
pub mod search;

pub use config::{ConfigError, StoreConfig};
pub use db::{Database, RepositoryError};
