//! Data models for the contact book.
//!
//! This module contains the contact record: a name with its phone numbers
//! and an optional birthday.

pub mod record;

pub use record::ContactRecord;
