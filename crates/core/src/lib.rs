//! LightBnB Core - Shared domain types.
//!
//! This crate provides the value types used across the LightBnB workspace:
//! - `store` - `PostgreSQL` accessors for users, properties and reservations
//! - `cli` - Command-line client for the accessors
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O and no database access.
//! `sqlx` encoding for the ID and price newtypes is available behind the
//! `postgres` feature.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
