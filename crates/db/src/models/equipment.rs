//! Equipment (evidence item) model and DTOs.

use forensic_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An equipment row from the `equipment` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Equipment {
    pub id: DbId,
    pub case_id: DbId,
    pub equipment_type: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub imei: Option<String>,
    pub physical_condition: Option<String>,
    pub damage_description: Option<String>,
    pub accessories: Option<String>,
    pub received_from: Option<String>,
    pub received_at: Timestamp,
    pub custody_notes: Option<String>,
}

/// DTO for registering equipment against a case.
#[derive(Debug, Clone, Default)]
pub struct CreateEquipment {
    pub case_id: DbId,
    pub equipment_type: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub imei: Option<String>,
    pub physical_condition: Option<String>,
    pub damage_description: Option<String>,
    pub accessories: Option<String>,
    pub received_from: Option<String>,
    pub custody_notes: Option<String>,
}
