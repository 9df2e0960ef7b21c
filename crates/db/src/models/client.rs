//! Client entity model and DTOs.

use forensic_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::case::Case;

/// A client row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub registered_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A client together with every case that references it.
#[derive(Debug, Clone, Serialize)]
pub struct ClientWithCases {
    #[serde(flatten)]
    pub client: Client,
    pub cases: Vec<Case>,
}

/// DTO for creating a new client.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClient {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// DTO for updating an existing client. All fields are optional; `None`
/// keeps the stored value and a blank `phone` or `address` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateClient {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Aggregate counters for `GET /clients/stats`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClientStats {
    pub total_clients: i64,
    pub clients_with_active_cases: i64,
    pub recent_clients: i64,
}

/// Outcome of a guarded client delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientDeletion {
    Deleted,
    NotFound,
    /// The client still has this many cases whose status is not `closed`.
    Blocked { open_cases: i64 },
}
