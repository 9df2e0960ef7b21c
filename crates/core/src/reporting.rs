//! Dashboard aggregation helpers: time windows, month labels, and the
//! merged recent-activity feed.

use chrono::{Datelike, Duration, TimeZone, Utc};
use serde::Serialize;

use crate::types::{DbId, Timestamp};

/// Trailing window (days) for the "recent" counters on the case, client,
/// and contact stats endpoints.
pub const RECENT_WINDOW_DAYS: i64 = 30;

/// Trailing window (days) for the dashboard's weekly counters.
pub const WEEKLY_WINDOW_DAYS: i64 = 7;

/// Lookback (days) for the monthly chart series. Not calendar-aligned, so
/// the oldest bucket is usually a partial month.
pub const CHART_LOOKBACK_DAYS: i64 = 365;

/// Maximum number of entries in the recent-activity feed.
pub const ACTIVITY_FEED_LIMIT: usize = 15;

/// Per-source limits for the recent-activity feed.
pub const ACTIVITY_RECENT_CASES: i64 = 10;
pub const ACTIVITY_RECENT_CLIENTS: i64 = 5;
pub const ACTIVITY_UNREAD_CONTACTS: i64 = 5;

/// Number of open cases listed by the pending-cases widget.
pub const PENDING_CASES_LIMIT: i64 = 10;

/// Wall-clock instant `days` before `now`.
pub fn days_ago(now: Timestamp, days: i64) -> Timestamp {
    now - Duration::days(days)
}

/// First instant (00:00:00 UTC) of the calendar month containing `now`.
pub fn month_start(now: Timestamp) -> Timestamp {
    Utc.with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .single()
        .unwrap_or(now)
}

/// Chart label for a month bucket, e.g. `"Mar 2026"`.
pub fn month_label(month: Timestamp) -> String {
    month.format("%b %Y").to_string()
}

/// Whole days a case has been open, never negative.
pub fn days_open(opened_at: Timestamp, now: Timestamp) -> i64 {
    (now - opened_at).num_days().max(0)
}

/// Source of an activity feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Case,
    Client,
    Contact,
}

/// One entry of the dashboard's recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityItem {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub description: String,
    pub time: Timestamp,
    pub id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl ActivityItem {
    pub fn case(id: DbId, title: &str, priority: &str, opened_at: Timestamp) -> Self {
        Self {
            kind: ActivityKind::Case,
            description: format!("New case: {title}"),
            time: opened_at,
            id,
            priority: Some(priority.to_string()),
            subject: None,
        }
    }

    pub fn client(id: DbId, full_name: &str, registered_at: Timestamp) -> Self {
        Self {
            kind: ActivityKind::Client,
            description: format!("New client registered: {full_name}"),
            time: registered_at,
            id,
            priority: None,
            subject: None,
        }
    }

    pub fn contact(id: DbId, name: &str, subject: Option<&str>, sent_at: Timestamp) -> Self {
        Self {
            kind: ActivityKind::Contact,
            description: format!("New message from: {name}"),
            time: sent_at,
            id,
            priority: None,
            subject: subject.map(str::to_string),
        }
    }
}

/// Merge activity entries from every source into one feed: newest first,
/// at most [`ACTIVITY_FEED_LIMIT`] entries.
///
/// The sort is stable, so entries with equal timestamps keep their source
/// order (cases, then clients, then contacts).
pub fn merge_activity(items: impl IntoIterator<Item = ActivityItem>) -> Vec<ActivityItem> {
    let mut feed: Vec<ActivityItem> = items.into_iter().collect();
    feed.sort_by(|a, b| b.time.cmp(&a.time));
    feed.truncate(ACTIVITY_FEED_LIMIT);
    feed
}

/// Labels + values for a bar/line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries<T> {
    pub labels: Vec<String>,
    pub data: Vec<T>,
}

/// Build a month-labelled series from `(month_start, value)` buckets that
/// are already ordered chronologically.
pub fn monthly_series<T>(buckets: impl IntoIterator<Item = (Timestamp, T)>) -> ChartSeries<T> {
    let (labels, data) = buckets
        .into_iter()
        .map(|(month, value)| (month_label(month), value))
        .unzip();
    ChartSeries { labels, data }
}
