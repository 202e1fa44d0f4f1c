//! Records returned by and passed to the store accessors.
//!
//! These are plain data: they carry no database handle and perform no I/O.

pub mod property;
pub mod reservation;
pub mod user;

pub use property::{NewProperty, Property, PropertyListing};
pub use reservation::GuestReservation;
pub use user::{NewUser, User};
