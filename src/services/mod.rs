//! Service layer for contact book operations.
//!
//! Services take raw user arguments, resolve contacts by name and return
//! typed results for the CLI layer to render.

pub mod contact_service;

pub use contact_service::{AddOutcome, ContactService};
