//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async operations that
//! accept `&DbPool` as the first argument.

pub mod project_repo;

pub use project_repo::ProjectRepo;
