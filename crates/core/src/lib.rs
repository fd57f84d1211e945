//! Shared domain types for the bagtrail luggage-tracking service.
//!
//! This crate is dependency-light on purpose: it holds the error taxonomy,
//! ID/timestamp aliases, the luggage status set, and field validators used
//! by both the database and API layers.

pub mod error;
pub mod status;
pub mod types;
pub mod validation;
