#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for the "project does not exist" case shared by every
    /// id-addressed operation.
    pub fn project_not_found(id: &str) -> Self {
        CoreError::NotFound {
            entity: "Project",
            id: id.to_string(),
        }
    }
}
