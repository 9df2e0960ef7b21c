//! Route definitions for the `/dashboard` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`. All read-only.
///
/// ```text
/// GET /stats                       -> get_stats
/// GET /recent-activity             -> recent_activity
/// GET /pending-cases               -> pending_cases
/// GET /charts/cases-by-month       -> cases_by_month
/// GET /charts/cases-by-status      -> cases_by_status
/// GET /charts/revenue-by-month     -> revenue_by_month
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(dashboard::get_stats))
        .route("/recent-activity", get(dashboard::recent_activity))
        .route("/pending-cases", get(dashboard::pending_cases))
        .route("/charts/cases-by-month", get(dashboard::cases_by_month))
        .route("/charts/cases-by-status", get(dashboard::cases_by_status))
        .route("/charts/revenue-by-month", get(dashboard::revenue_by_month))
}
