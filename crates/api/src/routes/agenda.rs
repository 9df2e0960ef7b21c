//! Route definitions for the `/agenda` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::agenda;
use crate::state::AppState;

/// Routes mounted at `/agenda`.
///
/// ```text
/// GET    /        -> list_events
/// POST   /        -> create_event
/// DELETE /{id}    -> delete_event
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(agenda::list_events).post(agenda::create_event))
        .route("/{id}", delete(agenda::delete_event))
}
