//! User session model and DTOs.

use forensic_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A session row from the `user_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserSession {
    pub id: DbId,
    pub user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for creating a new session.
pub struct CreateSession {
    pub user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
}

/// The identity a live session resolves to.
#[derive(Debug, Clone, FromRow)]
pub struct SessionPrincipal {
    pub user_id: DbId,
    pub role: String,
}
