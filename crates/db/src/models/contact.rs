//! Inbound contact message model and DTOs.

use forensic_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub sent_at: Timestamp,
    pub is_read: bool,
}

/// DTO for storing a submitted message.
#[derive(Debug, Clone)]
pub struct CreateContact {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

/// Counters for `GET /contact/stats`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactStats {
    pub total_messages: i64,
    pub unread_messages: i64,
    pub recent_messages: i64,
}
