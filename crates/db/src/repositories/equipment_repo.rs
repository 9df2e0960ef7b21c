//! Repository for the `equipment` table.

use forensic_core::types::DbId;
use sqlx::PgPool;

use crate::models::equipment::{CreateEquipment, Equipment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, case_id, equipment_type, brand, model, serial_number, imei, \
                        physical_condition, damage_description, accessories, \
                        received_from, received_at, custody_notes";

/// Provides CRUD operations for evidentiary equipment.
pub struct EquipmentRepo;

impl EquipmentRepo {
    /// Register an item against `input.case_id`, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEquipment) -> Result<Equipment, sqlx::Error> {
        let query = format!(
            "INSERT INTO equipment
                (case_id, equipment_type, brand, model, serial_number, imei,
                 physical_condition, damage_description, accessories,
                 received_from, custody_notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Equipment>(&query)
            .bind(input.case_id)
            .bind(&input.equipment_type)
            .bind(&input.brand)
            .bind(&input.model)
            .bind(&input.serial_number)
            .bind(&input.imei)
            .bind(&input.physical_condition)
            .bind(&input.damage_description)
            .bind(&input.accessories)
            .bind(&input.received_from)
            .bind(&input.custody_notes)
            .fetch_one(pool)
            .await
    }

    /// All equipment for a case, in order of receipt.
    pub async fn list_for_case(pool: &PgPool, case_id: DbId) -> Result<Vec<Equipment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM equipment WHERE case_id = $1 ORDER BY received_at, id"
        );
        sqlx::query_as::<_, Equipment>(&query)
            .bind(case_id)
            .fetch_all(pool)
            .await
    }

    /// Total number of registered items.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM equipment")
            .fetch_one(pool)
            .await
    }
}
