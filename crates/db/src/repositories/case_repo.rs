//! Repository for the `cases` table.
//!
//! Reads always join the client's and assigned lawyer's names, so every
//! query selects from `cases c` with the shared [`JOINS`] clause.

use forensic_core::pagination::PageRequest;
use forensic_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::case::{Case, CaseStats, CreateCase, UpdateCase};
use crate::models::dashboard::OpenCase;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "c.id, c.case_number, c.title, c.description, c.client_id, \
                        cl.full_name AS client_name, c.assigned_lawyer_id, \
                        u.full_name AS lawyer_name, c.status, c.priority, \
                        c.opened_at, c.closed_at, c.updated_at";

const JOINS: &str = "LEFT JOIN clients cl ON cl.id = c.client_id \
                     LEFT JOIN users u ON u.id = c.assigned_lawyer_id";

/// Provides CRUD and reporting queries for cases.
pub struct CaseRepo;

impl CaseRepo {
    /// Insert a new case, returning the created row with joined names.
    pub async fn create(pool: &PgPool, input: &CreateCase) -> Result<Case, sqlx::Error> {
        let query = format!(
            "WITH c AS (
                INSERT INTO cases
                    (case_number, title, description, client_id, assigned_lawyer_id, status, priority)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING *
             )
             SELECT {COLUMNS} FROM c {JOINS}"
        );
        sqlx::query_as::<_, Case>(&query)
            .bind(&input.case_number)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.client_id)
            .bind(input.assigned_lawyer_id)
            .bind(&input.status)
            .bind(&input.priority)
            .fetch_one(pool)
            .await
    }

    /// Find a case by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Case>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cases c {JOINS} WHERE c.id = $1");
        sqlx::query_as::<_, Case>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a case with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM cases WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Whether a case number is already taken.
    pub async fn exists_case_number(pool: &PgPool, case_number: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM cases WHERE case_number = $1)",
        )
        .bind(case_number)
        .fetch_one(pool)
        .await
    }

    /// List one page of cases, newest first, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        page: &PageRequest,
    ) -> Result<Vec<Case>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cases c {JOINS}
             WHERE ($1::TEXT IS NULL OR c.status = $1)
             ORDER BY c.opened_at DESC, c.id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Case>(&query)
            .bind(status)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Count cases, optionally filtered by status.
    pub async fn count(pool: &PgPool, status: Option<&str>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM cases WHERE ($1::TEXT IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(pool)
        .await
    }

    /// All cases belonging to a client, newest first.
    pub async fn list_for_client(pool: &PgPool, client_id: DbId) -> Result<Vec<Case>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cases c {JOINS}
             WHERE c.client_id = $1
             ORDER BY c.opened_at DESC, c.id DESC"
        );
        sqlx::query_as::<_, Case>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Update a case. Only non-`None` fields in `input` are applied.
    ///
    /// Moving to `closed` stamps `closed_at` unless it is already set.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCase,
    ) -> Result<Option<Case>, sqlx::Error> {
        let query = format!(
            "WITH c AS (
                UPDATE cases SET
                    title = COALESCE($2, title),
                    description = CASE
                        WHEN $3::TEXT IS NULL THEN description
                        ELSE NULLIF(BTRIM($3), '')
                    END,
                    assigned_lawyer_id = COALESCE($4, assigned_lawyer_id),
                    status = COALESCE($5, status),
                    priority = COALESCE($6, priority),
                    closed_at = CASE
                        WHEN $5::TEXT = 'closed' AND closed_at IS NULL THEN NOW()
                        ELSE closed_at
                    END
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM c {JOINS}"
        );
        sqlx::query_as::<_, Case>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.assigned_lawyer_id)
            .bind(&input.status)
            .bind(&input.priority)
            .fetch_optional(pool)
            .await
    }

    /// Delete a case; its equipment goes with it via `ON DELETE CASCADE`.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cases WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Counters for the stats endpoint. `recent_since` bounds `recent_cases`.
    pub async fn stats(pool: &PgPool, recent_since: Timestamp) -> Result<CaseStats, sqlx::Error> {
        sqlx::query_as::<_, CaseStats>(
            "SELECT
                COUNT(*)::BIGINT AS total_cases,
                COUNT(*) FILTER (WHERE status = 'in_progress')::BIGINT AS active_cases,
                COUNT(*) FILTER (WHERE status = 'pending')::BIGINT AS pending_cases,
                COUNT(*) FILTER (WHERE status = 'closed')::BIGINT AS closed_cases,
                COUNT(*) FILTER (WHERE priority = 'high')::BIGINT AS high_priority,
                COUNT(*) FILTER (WHERE priority = 'urgent')::BIGINT AS urgent_cases,
                COUNT(*) FILTER (WHERE opened_at >= $1)::BIGINT AS recent_cases
             FROM cases",
        )
        .bind(recent_since)
        .fetch_one(pool)
        .await
    }

    /// The `limit` most recently opened cases.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<Case>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cases c {JOINS}
             ORDER BY c.opened_at DESC, c.id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, Case>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// The `limit` most recently opened cases still pending or in progress.
    pub async fn list_open(pool: &PgPool, limit: i64) -> Result<Vec<OpenCase>, sqlx::Error> {
        sqlx::query_as::<_, OpenCase>(
            "SELECT c.id, c.case_number, c.title, cl.full_name AS client_name,
                    c.status, c.priority, c.opened_at
             FROM cases c
             LEFT JOIN clients cl ON cl.id = c.client_id
             WHERE c.status IN ('pending', 'in_progress')
             ORDER BY c.opened_at DESC, c.id DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
