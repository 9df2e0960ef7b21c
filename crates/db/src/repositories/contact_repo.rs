//! Repository for the `contacts` table.

use forensic_core::pagination::PageRequest;
use forensic_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::contact::{Contact, ContactStats, CreateContact};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, subject, message, sent_at, is_read";

/// Provides CRUD operations for inbound contact messages.
pub struct ContactRepo;

impl ContactRepo {
    /// Store a submitted message, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (name, email, subject, message)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.subject)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List one page of messages, newest first.
    pub async fn list(
        pool: &PgPool,
        unread_only: bool,
        page: &PageRequest,
    ) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contacts
             WHERE ($1 = false OR is_read = false)
             ORDER BY sent_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(unread_only)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Count messages matching the same filter as [`ContactRepo::list`].
    pub async fn count(pool: &PgPool, unread_only: bool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM contacts WHERE ($1 = false OR is_read = false)",
        )
        .bind(unread_only)
        .fetch_one(pool)
        .await
    }

    /// Mark a message as read. Returns `false` if no such message exists.
    pub async fn mark_read(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE contacts SET is_read = true WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Counters for the stats endpoint. `recent_since` bounds `recent_messages`.
    pub async fn stats(pool: &PgPool, recent_since: Timestamp) -> Result<ContactStats, sqlx::Error> {
        sqlx::query_as::<_, ContactStats>(
            "SELECT
                COUNT(*)::BIGINT AS total_messages,
                COUNT(*) FILTER (WHERE is_read = false)::BIGINT AS unread_messages,
                COUNT(*) FILTER (WHERE sent_at >= $1)::BIGINT AS recent_messages
             FROM contacts",
        )
        .bind(recent_since)
        .fetch_one(pool)
        .await
    }

    /// The `limit` newest unread messages.
    pub async fn list_recent_unread(pool: &PgPool, limit: i64) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contacts
             WHERE is_read = false
             ORDER BY sent_at DESC, id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
