//! Contact Book - a command-line personal contact manager.
//!
//! Contacts have a name, any number of ten-digit phone numbers and an
//! optional birthday. The book lists contacts in the order they were added
//! and reports birthdays coming up in the next week, moving weekend dates
//! to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record
//! - **book**: Insertion-ordered address book and the birthday window
//! - **services**: Name-based operations returning typed results
//! - **cli**: Command parsing and reply rendering
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types

pub mod book;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod services;

pub use book::{AddressBook, UpcomingBirthday};
pub use cli::{CommandHandler, Reply};
pub use config::Config;
pub use domain::{BirthdayDate, Name, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::ContactRecord;
pub use services::{AddOutcome, ContactService};
