//! Case lifecycle values (status and priority).
//!
//! Both are stored as `TEXT` columns guarded by `CHECK` constraints; the
//! string forms returned by [`CaseStatus::as_str`] and
//! [`CasePriority::as_str`] must stay in sync with the migrations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle status of a case.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    #[default]
    Pending,
    InProgress,
    Closed,
    Archived,
}

impl CaseStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [CaseStatus; 4] = [
        CaseStatus::Pending,
        CaseStatus::InProgress,
        CaseStatus::Closed,
        CaseStatus::Archived,
    ];

    /// Database / wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            CaseStatus::Pending => "pending",
            CaseStatus::InProgress => "in_progress",
            CaseStatus::Closed => "closed",
            CaseStatus::Archived => "archived",
        }
    }

    /// Human-readable chart label.
    pub fn label(self) -> &'static str {
        match self {
            CaseStatus::Pending => "Pending",
            CaseStatus::InProgress => "In Progress",
            CaseStatus::Closed => "Closed",
            CaseStatus::Archived => "Archived",
        }
    }

    /// Chart color (hex) used by the front end.
    pub fn color(self) -> &'static str {
        match self {
            CaseStatus::Pending => "#ffc107",
            CaseStatus::InProgress => "#17a2b8",
            CaseStatus::Closed => "#28a745",
            CaseStatus::Archived => "#6c757d",
        }
    }

    /// Whether a case in this status still blocks deletion of its client.
    pub fn is_open(self) -> bool {
        self != CaseStatus::Closed
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid status '{s}'. Expected one of: pending, in_progress, closed, archived"
                ))
            })
    }
}

/// Priority of a case.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CasePriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl CasePriority {
    pub const ALL: [CasePriority; 4] = [
        CasePriority::Low,
        CasePriority::Medium,
        CasePriority::High,
        CasePriority::Urgent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CasePriority::Low => "low",
            CasePriority::Medium => "medium",
            CasePriority::High => "high",
            CasePriority::Urgent => "urgent",
        }
    }
}

impl fmt::Display for CasePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CasePriority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CasePriority::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid priority '{s}'. Expected one of: low, medium, high, urgent"
                ))
            })
    }
}

/// Parse an optional status string, falling back to the default (`pending`).
pub fn status_or_default(raw: Option<&str>) -> Result<CaseStatus, CoreError> {
    raw.map(str::parse::<CaseStatus>).transpose().map(Option::unwrap_or_default)
}

/// Parse an optional priority string, falling back to the default (`medium`).
pub fn priority_or_default(raw: Option<&str>) -> Result<CasePriority, CoreError> {
    raw.map(str::parse::<CasePriority>).transpose().map(Option::unwrap_or_default)
}
