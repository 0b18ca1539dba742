//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on the address book.
///
/// Every variant is a user-facing outcome: none of them leave the book in a
/// partially modified state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Input failed value object validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No contact is stored under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The contact has no such phone number
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// Command was given fewer arguments than it needs
    #[error("Not enough arguments for '{command}'. Usage: {command} {usage}")]
    NotEnoughArguments {
        command: &'static str,
        usage: &'static str,
    },

    /// Command was given more arguments than it accepts
    #[error("Too many arguments for '{command}'. Usage: {command} {usage}")]
    TooManyArguments {
        command: &'static str,
        usage: &'static str,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
