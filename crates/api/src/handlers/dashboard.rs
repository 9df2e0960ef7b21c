//! Handlers for the `/dashboard` resource.
//!
//! Read-only aggregates over cases, clients, equipment, contacts, and
//! income. Window boundaries are computed here from wall-clock UTC and
//! passed to the repositories as explicit timestamps.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use forensic_core::cases::CaseStatus;
use forensic_core::reporting::{
    days_ago, days_open, merge_activity, month_start, monthly_series, ActivityItem,
    ChartSeries, ACTIVITY_RECENT_CASES, ACTIVITY_RECENT_CLIENTS, ACTIVITY_UNREAD_CONTACTS,
    CHART_LOOKBACK_DAYS, PENDING_CASES_LIMIT, WEEKLY_WINDOW_DAYS,
};
use forensic_core::types::{DbId, Timestamp};
use forensic_db::repositories::{
    CaseRepo, ClientRepo, ContactRepo, DashboardRepo, EquipmentRepo, TransactionRepo,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::Keyed;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub basic_stats: BasicStats,
    pub case_stats: CaseBreakdown,
    pub recent_activity: WeeklyActivity,
    pub financial: Financial,
}

#[derive(Debug, Serialize)]
pub struct BasicStats {
    pub total_cases: i64,
    pub active_cases: i64,
    pub total_clients: i64,
    pub total_equipment: i64,
}

#[derive(Debug, Serialize)]
pub struct CaseBreakdown {
    pub pending: i64,
    pub active: i64,
    pub closed: i64,
    pub urgent: i64,
    pub high_priority: i64,
}

#[derive(Debug, Serialize)]
pub struct WeeklyActivity {
    pub new_cases_week: i64,
    pub new_clients_week: i64,
}

#[derive(Debug, Serialize)]
pub struct Financial {
    /// Income since the first instant of the current UTC month.
    pub monthly_income: f64,
}

/// An open case row for the pending-cases widget.
#[derive(Debug, Serialize)]
pub struct PendingCase {
    pub id: DbId,
    pub case_number: String,
    pub title: String,
    pub client_name: Option<String>,
    pub status: String,
    pub priority: String,
    pub opened_at: Timestamp,
    pub days_open: i64,
}

/// Status chart: one label, count, and color per status present.
#[derive(Debug, Serialize)]
pub struct StatusChart {
    pub labels: Vec<String>,
    pub data: Vec<i64>,
    pub colors: Vec<String>,
}

/// Fallback color for a status value outside the known set.
const UNKNOWN_STATUS_COLOR: &str = "#007bff";

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/dashboard/stats
pub async fn get_stats(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DashboardStats>> {
    let now = Utc::now();
    let week_ago = days_ago(now, WEEKLY_WINDOW_DAYS);

    let cases = CaseRepo::stats(&state.pool, week_ago).await?;
    let total_clients = ClientRepo::count(&state.pool, None).await?;
    let new_clients_week = ClientRepo::count_since(&state.pool, week_ago).await?;
    let total_equipment = EquipmentRepo::count(&state.pool).await?;
    let monthly_income = TransactionRepo::sum_income_since(&state.pool, month_start(now)).await?;

    Ok(Json(DashboardStats {
        basic_stats: BasicStats {
            total_cases: cases.total_cases,
            active_cases: cases.active_cases,
            total_clients,
            total_equipment,
        },
        case_stats: CaseBreakdown {
            pending: cases.pending_cases,
            active: cases.active_cases,
            closed: cases.closed_cases,
            urgent: cases.urgent_cases,
            high_priority: cases.high_priority,
        },
        recent_activity: WeeklyActivity {
            new_cases_week: cases.recent_cases,
            new_clients_week,
        },
        financial: Financial { monthly_income },
    }))
}

/// GET /api/dashboard/recent-activity
///
/// Newest cases, clients, and unread messages merged into one feed of at
/// most 15 entries, newest first.
pub async fn recent_activity(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Keyed<Vec<ActivityItem>>>> {
    let cases = CaseRepo::list_recent(&state.pool, ACTIVITY_RECENT_CASES).await?;
    let clients = ClientRepo::list_recent(&state.pool, ACTIVITY_RECENT_CLIENTS).await?;
    let contacts = ContactRepo::list_recent_unread(&state.pool, ACTIVITY_UNREAD_CONTACTS).await?;

    let items = cases
        .iter()
        .map(|c| ActivityItem::case(c.id, &c.title, &c.priority, c.opened_at))
        .chain(
            clients
                .iter()
                .map(|c| ActivityItem::client(c.id, &c.full_name, c.registered_at)),
        )
        .chain(
            contacts
                .iter()
                .map(|c| ActivityItem::contact(c.id, &c.name, c.subject.as_deref(), c.sent_at)),
        );

    Ok(Json(Keyed::new("activity", merge_activity(items))))
}

/// GET /api/dashboard/pending-cases
pub async fn pending_cases(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Keyed<Vec<PendingCase>>>> {
    let now = Utc::now();
    let open = CaseRepo::list_open(&state.pool, PENDING_CASES_LIMIT).await?;

    let cases = open
        .into_iter()
        .map(|c| PendingCase {
            days_open: days_open(c.opened_at, now),
            id: c.id,
            case_number: c.case_number,
            title: c.title,
            client_name: c.client_name,
            status: c.status,
            priority: c.priority,
            opened_at: c.opened_at,
        })
        .collect();

    Ok(Json(Keyed::new("pending_cases", cases)))
}

/// GET /api/dashboard/charts/cases-by-month
pub async fn cases_by_month(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<ChartSeries<i64>>> {
    let since = days_ago(Utc::now(), CHART_LOOKBACK_DAYS);
    let rows = DashboardRepo::cases_by_month(&state.pool, since).await?;
    Ok(Json(monthly_series(rows.into_iter().map(|r| (r.month, r.count)))))
}

/// GET /api/dashboard/charts/cases-by-status
pub async fn cases_by_status(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<StatusChart>> {
    let rows = DashboardRepo::cases_by_status(&state.pool).await?;

    let mut chart = StatusChart {
        labels: Vec::with_capacity(rows.len()),
        data: Vec::with_capacity(rows.len()),
        colors: Vec::with_capacity(rows.len()),
    };
    for row in rows {
        match row.status.parse::<CaseStatus>() {
            Ok(status) => {
                chart.labels.push(status.label().to_string());
                chart.colors.push(status.color().to_string());
            }
            Err(_) => {
                chart.labels.push(row.status);
                chart.colors.push(UNKNOWN_STATUS_COLOR.to_string());
            }
        }
        chart.data.push(row.count);
    }

    Ok(Json(chart))
}

/// GET /api/dashboard/charts/revenue-by-month
pub async fn revenue_by_month(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<ChartSeries<f64>>> {
    let since = days_ago(Utc::now(), CHART_LOOKBACK_DAYS);
    let rows = DashboardRepo::revenue_by_month(&state.pool, since).await?;
    Ok(Json(monthly_series(rows.into_iter().map(|r| (r.month, r.total)))))
}
