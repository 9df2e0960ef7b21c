//! Domain error taxonomy shared by the db and api crates.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A record looked up by id is missing, or a request references one
    /// that is.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A required field is missing or a value is outside its allowed set.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A unique value (case number, client or user email) is already taken.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// No live session, or login credentials were rejected.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated, but the role or ownership check failed.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = CoreError::NotFound {
            entity: "Client",
            id: 7,
        };
        assert_eq!(err.to_string(), "Entity not found: Client with id 7");
    }
}
