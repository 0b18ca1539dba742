//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! its name, phone numbers and birthday. These value objects validate their
//! input at construction time so that an invalid value can never be stored
//! in a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::BirthdayDate;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::PhoneNumber;
