#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `id` is a string because series ids are integers while episode ids
    /// are UUIDs.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
