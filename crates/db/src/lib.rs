//! In-memory project store.
//!
//! The store is constructed explicitly at startup (empty) and shared through
//! [`DbPool`]. Nothing is persisted: the collection lives for the lifetime of
//! the process.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::project::Project;

pub mod catalog;
pub mod models;
pub mod repositories;

/// Owner of the project collection.
///
/// Mutations take the write lock for their whole read-modify-write span so
/// concurrent views and ratings are never lost. Reads share the read lock.
#[derive(Debug, Default)]
pub struct ProjectStore {
    pub(crate) projects: RwLock<Vec<Project>>,
}

/// Cheaply cloneable handle to the store, passed to every repository call.
pub type DbPool = Arc<ProjectStore>;

/// Create an empty store.
pub fn create_pool() -> DbPool {
    Arc::new(ProjectStore::default())
}
