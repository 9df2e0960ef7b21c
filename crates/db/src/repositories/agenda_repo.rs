//! Repository for the `agenda_events` table.

use forensic_core::types::DbId;
use sqlx::PgPool;

use crate::models::agenda::{AgendaEvent, AgendaFilter, CreateAgendaEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, starts_at, ends_at, location, event_type, \
                        user_id, case_id, created_at";

/// Provides CRUD operations for calendar events.
pub struct AgendaRepo;

impl AgendaRepo {
    /// Insert an event owned by `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateAgendaEvent,
    ) -> Result<AgendaEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO agenda_events
                (title, description, starts_at, ends_at, location, event_type, user_id, case_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AgendaEvent>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .bind(&input.location)
            .bind(&input.event_type)
            .bind(user_id)
            .bind(input.case_id)
            .fetch_one(pool)
            .await
    }

    /// Find an event by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AgendaEvent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM agenda_events WHERE id = $1");
        sqlx::query_as::<_, AgendaEvent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A user's events ordered by start time, bounded by the filter.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        filter: &AgendaFilter,
    ) -> Result<Vec<AgendaEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM agenda_events
             WHERE user_id = $1
               AND ($2::TIMESTAMPTZ IS NULL OR starts_at >= $2)
               AND ($3::TIMESTAMPTZ IS NULL OR starts_at <= $3)
               AND ($4::BIGINT IS NULL OR case_id = $4)
             ORDER BY starts_at, id"
        );
        sqlx::query_as::<_, AgendaEvent>(&query)
            .bind(user_id)
            .bind(filter.from)
            .bind(filter.to)
            .bind(filter.case_id)
            .fetch_all(pool)
            .await
    }

    /// Delete an event. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM agenda_events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
