use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Nothing scheduled: {0}")]
    NotScheduled(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Activation preconditions are not met.
    #[error("{0}")]
    Ineligible(String),

    /// A data-store call failed; `context` names the step that failed.
    #[error("{context}: {message}")]
    Upstream {
        context: &'static str,
        message: String,
    },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl CoreError {
    /// Build an [`CoreError::Upstream`] from any displayable store failure.
    pub fn upstream(context: &'static str, err: impl std::fmt::Display) -> Self {
        CoreError::Upstream {
            context,
            message: err.to_string(),
        }
    }
}
