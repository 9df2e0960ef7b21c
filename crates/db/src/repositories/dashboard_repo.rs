//! Grouped aggregates behind the dashboard charts.

use forensic_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::dashboard::{MonthlyAmount, MonthlyCount, StatusCount};

/// Read-only reporting queries.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Cases opened per calendar month (UTC) since `since`, oldest month first.
    pub async fn cases_by_month(
        pool: &PgPool,
        since: Timestamp,
    ) -> Result<Vec<MonthlyCount>, sqlx::Error> {
        sqlx::query_as::<_, MonthlyCount>(
            "SELECT date_trunc('month', opened_at, 'UTC') AS month,
                    COUNT(*)::BIGINT AS count
             FROM cases
             WHERE opened_at >= $1
             GROUP BY 1
             ORDER BY 1",
        )
        .bind(since)
        .fetch_all(pool)
        .await
    }

    /// Income summed per calendar month (UTC) since `since`, oldest month first.
    pub async fn revenue_by_month(
        pool: &PgPool,
        since: Timestamp,
    ) -> Result<Vec<MonthlyAmount>, sqlx::Error> {
        sqlx::query_as::<_, MonthlyAmount>(
            "SELECT date_trunc('month', occurred_at, 'UTC') AS month,
                    SUM(amount)::DOUBLE PRECISION AS total
             FROM transactions
             WHERE kind = 'income' AND occurred_at >= $1
             GROUP BY 1
             ORDER BY 1",
        )
        .bind(since)
        .fetch_all(pool)
        .await
    }

    /// Current number of cases in each status that has at least one case.
    pub async fn cases_by_status(pool: &PgPool) -> Result<Vec<StatusCount>, sqlx::Error> {
        sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*)::BIGINT AS count FROM cases GROUP BY status ORDER BY status",
        )
        .fetch_all(pool)
        .await
    }
}
