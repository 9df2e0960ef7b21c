//! Read-only projections used by the dashboard aggregator.

use forensic_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Number of cases opened in one calendar month.
#[derive(Debug, Clone, FromRow)]
pub struct MonthlyCount {
    pub month: Timestamp,
    pub count: i64,
}

/// Income summed over one calendar month.
#[derive(Debug, Clone, FromRow)]
pub struct MonthlyAmount {
    pub month: Timestamp,
    pub total: f64,
}

/// Number of cases currently in one status.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

/// An open case as listed by the pending-cases widget.
#[derive(Debug, Clone, FromRow)]
pub struct OpenCase {
    pub id: DbId,
    pub case_number: String,
    pub title: String,
    pub client_name: Option<String>,
    pub status: String,
    pub priority: String,
    pub opened_at: Timestamp,
}
