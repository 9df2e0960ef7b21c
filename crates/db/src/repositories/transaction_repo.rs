//! Repository for the `transactions` table.

use forensic_core::pagination::PageRequest;
use forensic_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::transaction::{CreateTransaction, Transaction};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, case_id, kind, concept, amount, occurred_at, user_id";

/// Provides CRUD operations for financial transactions.
pub struct TransactionRepo;

impl TransactionRepo {
    /// Record a transaction, returning the created row.
    ///
    /// A missing `occurred_at` defaults to the insert time.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTransaction,
    ) -> Result<Transaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO transactions (case_id, kind, concept, amount, occurred_at, user_id)
             VALUES ($1, $2, $3, $4, COALESCE($5, NOW()), $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(input.case_id)
            .bind(&input.kind)
            .bind(&input.concept)
            .bind(input.amount)
            .bind(input.occurred_at)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    /// List one page of transactions, newest first.
    pub async fn list(
        pool: &PgPool,
        case_id: Option<DbId>,
        kind: Option<&str>,
        page: &PageRequest,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM transactions
             WHERE ($1::BIGINT IS NULL OR case_id = $1)
               AND ($2::TEXT IS NULL OR kind = $2)
             ORDER BY occurred_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(case_id)
            .bind(kind)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Count transactions matching the same filter as [`TransactionRepo::list`].
    pub async fn count(
        pool: &PgPool,
        case_id: Option<DbId>,
        kind: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM transactions
             WHERE ($1::BIGINT IS NULL OR case_id = $1)
               AND ($2::TEXT IS NULL OR kind = $2)",
        )
        .bind(case_id)
        .bind(kind)
        .fetch_one(pool)
        .await
    }

    /// Sum of income recorded at or after `since`; zero when there is none.
    pub async fn sum_income_since(pool: &PgPool, since: Timestamp) -> Result<f64, sqlx::Error> {
        sqlx::query_scalar::<_, f64>(
            "SELECT COALESCE(SUM(amount), 0)::DOUBLE PRECISION FROM transactions
             WHERE kind = 'income' AND occurred_at >= $1",
        )
        .bind(since)
        .fetch_one(pool)
        .await
    }
}
