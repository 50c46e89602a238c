//! Data models and DTOs.

pub mod project;
