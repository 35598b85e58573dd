#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No record matched a lookup. `key` is whatever the lookup used
    /// (an id, a title).
    #[error("Entity not found: {entity} with key {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The upload collaborator could not decode the incoming file.
    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
