use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Invalid booking transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("No cylinders remaining for user {user_id}")]
    InsufficientAllocation { user_id: DbId },

    #[error("Conflict retry exhausted: {0}")]
    RetryExhausted(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
