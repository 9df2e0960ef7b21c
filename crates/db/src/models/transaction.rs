//! Financial transaction model and DTOs.

use forensic_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `transactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Transaction {
    pub id: DbId,
    pub case_id: Option<DbId>,
    #[serde(rename = "type")]
    pub kind: String,
    pub concept: String,
    pub amount: f64,
    pub occurred_at: Timestamp,
    pub user_id: Option<DbId>,
}

/// DTO for recording a transaction. `kind` is already validated.
#[derive(Debug, Clone)]
pub struct CreateTransaction {
    pub case_id: Option<DbId>,
    pub kind: String,
    pub concept: String,
    pub amount: f64,
    pub occurred_at: Option<Timestamp>,
    pub user_id: DbId,
}
