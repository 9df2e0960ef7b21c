//! Case entity model and DTOs.

use forensic_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::equipment::Equipment;

/// A case row joined with its client's and lawyer's display names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Case {
    pub id: DbId,
    pub case_number: String,
    pub title: String,
    pub description: Option<String>,
    pub client_id: Option<DbId>,
    pub client_name: Option<String>,
    pub assigned_lawyer_id: Option<DbId>,
    pub lawyer_name: Option<String>,
    pub status: String,
    pub priority: String,
    pub opened_at: Timestamp,
    pub closed_at: Option<Timestamp>,
    pub updated_at: Timestamp,
}

/// A case together with its evidentiary equipment.
#[derive(Debug, Clone, Serialize)]
pub struct CaseWithEquipment {
    #[serde(flatten)]
    pub case: Case,
    pub equipment: Vec<Equipment>,
}

/// DTO for inserting a case. Status and priority are already validated.
#[derive(Debug, Clone)]
pub struct CreateCase {
    pub case_number: String,
    pub title: String,
    pub description: Option<String>,
    pub client_id: DbId,
    pub assigned_lawyer_id: Option<DbId>,
    pub status: String,
    pub priority: String,
}

/// DTO for updating a case. All fields are optional; `None` keeps the
/// stored value and a blank `description` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCase {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assigned_lawyer_id: Option<DbId>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

/// Aggregate counters for `GET /cases/stats` and the dashboard.
#[derive(Debug, Clone, Default, FromRow, Serialize)]
pub struct CaseStats {
    pub total_cases: i64,
    pub active_cases: i64,
    pub pending_cases: i64,
    pub closed_cases: i64,
    pub high_priority: i64,
    pub urgent_cases: i64,
    pub recent_cases: i64,
}
