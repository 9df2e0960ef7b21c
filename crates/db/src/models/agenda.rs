//! Agenda (calendar) event model and DTOs.

use forensic_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `agenda_events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AgendaEvent {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Option<Timestamp>,
    pub location: Option<String>,
    pub event_type: Option<String>,
    pub user_id: DbId,
    pub case_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for creating an agenda event. The owner comes from the session.
#[derive(Debug, Clone)]
pub struct CreateAgendaEvent {
    pub title: String,
    pub description: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Option<Timestamp>,
    pub location: Option<String>,
    pub event_type: Option<String>,
    pub case_id: Option<DbId>,
}

/// Filters for listing a user's agenda.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgendaFilter {
    pub from: Option<Timestamp>,
    pub to: Option<Timestamp>,
    pub case_id: Option<DbId>,
}
