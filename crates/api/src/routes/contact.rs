//! Route definitions for the `/contact` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contact`.
///
/// ```text
/// POST /            -> submit_contact (public)
/// GET  /            -> list_contacts
/// GET  /stats       -> contact_stats
/// PUT  /{id}/read   -> mark_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(contact::list_contacts).post(contact::submit_contact),
        )
        .route("/stats", get(contact::contact_stats))
        .route("/{id}/read", put(contact::mark_read))
}
