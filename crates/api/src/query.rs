//! Shared query parameter types for API handlers.
//!
//! Filters and pagination are separate structs so a handler can take two
//! `Query` extractors over the same query string.

use forensic_core::pagination::PageRequest;
use forensic_core::types::DbId;
use serde::Deserialize;

/// Page-number pagination parameters (`?page=&per_page=`).
///
/// Values are clamped by [`PageRequest::new`].
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl PageParams {
    pub fn resolve(&self) -> PageRequest {
        PageRequest::new(self.page, self.per_page)
    }
}

/// `GET /cases?status=`
#[derive(Debug, Default, Deserialize)]
pub struct CaseFilterParams {
    pub status: Option<String>,
}

/// `GET /clients?search=`
#[derive(Debug, Default, Deserialize)]
pub struct ClientSearchParams {
    pub search: Option<String>,
}

/// `GET /contact?unread_only=`
#[derive(Debug, Default, Deserialize)]
pub struct ContactFilterParams {
    #[serde(default)]
    pub unread_only: bool,
}

/// `GET /transactions?case_id=&type=`
#[derive(Debug, Default, Deserialize)]
pub struct TransactionFilterParams {
    pub case_id: Option<DbId>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
