//! Repository for the `clients` table.

use forensic_core::pagination::PageRequest;
use forensic_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::client::{Client, ClientDeletion, ClientStats, CreateClient, UpdateClient};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, email, phone, address, registered_at, updated_at";

/// Provides CRUD operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (full_name, email, phone, address)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .fetch_one(pool)
            .await
    }

    /// Find a client by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a client with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM clients WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Whether `email` belongs to a client other than `exclude_id`.
    pub async fn email_taken(
        pool: &PgPool,
        email: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM clients
                WHERE email = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// List one page of clients, newest first, optionally filtered by a
    /// case-insensitive substring of name or email.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        page: &PageRequest,
    ) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM clients
             WHERE ($1::TEXT IS NULL
                    OR full_name ILIKE '%' || $1 || '%'
                    OR email ILIKE '%' || $1 || '%')
             ORDER BY registered_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(search)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Count clients matching the same filter as [`ClientRepo::list`].
    pub async fn count(pool: &PgPool, search: Option<&str>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM clients
             WHERE ($1::TEXT IS NULL
                    OR full_name ILIKE '%' || $1 || '%'
                    OR email ILIKE '%' || $1 || '%')",
        )
        .bind(search)
        .fetch_one(pool)
        .await
    }

    /// Update a client. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClient,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "UPDATE clients SET
                full_name = COALESCE($2, full_name),
                email = COALESCE($3, email),
                phone = CASE WHEN $4::TEXT IS NULL THEN phone ELSE NULLIF(BTRIM($4), '') END,
                address = CASE WHEN $5::TEXT IS NULL THEN address ELSE NULLIF(BTRIM($5), '') END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .fetch_optional(pool)
            .await
    }

    /// Delete a client unless it still has cases that are not closed.
    ///
    /// The open-case count, the detach of its closed cases, and the delete
    /// run in one transaction; the client row is locked for the duration.
    pub async fn delete_unless_open_cases(
        pool: &PgPool,
        id: DbId,
    ) -> Result<ClientDeletion, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let found = sqlx::query_scalar::<_, DbId>("SELECT id FROM clients WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if found.is_none() {
            return Ok(ClientDeletion::NotFound);
        }

        let open_cases = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM cases WHERE client_id = $1 AND status <> 'closed'",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
        if open_cases > 0 {
            return Ok(ClientDeletion::Blocked { open_cases });
        }

        let detached = sqlx::query("UPDATE cases SET client_id = NULL WHERE client_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(client_id = id, detached_cases = detached, "Client deleted");
        Ok(ClientDeletion::Deleted)
    }

    /// Counters for the stats endpoint. `recent_since` bounds `recent_clients`.
    pub async fn stats(pool: &PgPool, recent_since: Timestamp) -> Result<ClientStats, sqlx::Error> {
        sqlx::query_as::<_, ClientStats>(
            "SELECT
                (SELECT COUNT(*)::BIGINT FROM clients) AS total_clients,
                (SELECT COUNT(DISTINCT client_id)::BIGINT FROM cases
                  WHERE client_id IS NOT NULL
                    AND status IN ('pending', 'in_progress')) AS clients_with_active_cases,
                (SELECT COUNT(*)::BIGINT FROM clients
                  WHERE registered_at >= $1) AS recent_clients",
        )
        .bind(recent_since)
        .fetch_one(pool)
        .await
    }

    /// Count clients registered at or after `since`.
    pub async fn count_since(pool: &PgPool, since: Timestamp) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM clients WHERE registered_at >= $1",
        )
        .bind(since)
        .fetch_one(pool)
        .await
    }

    /// The `limit` most recently registered clients.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM clients ORDER BY registered_at DESC, id DESC LIMIT $1"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
