//! Domain types and pure business rules for the project bank.
//!
//! This crate has no I/O and no knowledge of HTTP or storage, so both the
//! store and the API layer can share the same rules.

pub mod error;
pub mod faculty_validation;
pub mod project_fields;
pub mod rating;
pub mod roles;
pub mod search;
pub mod types;
