//! Route definitions for the `/cases` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::cases;
use crate::state::AppState;

/// Routes mounted at `/cases`.
///
/// ```text
/// GET    /                 -> list_cases
/// POST   /                 -> create_case
/// GET    /stats            -> case_stats
/// GET    /{id}             -> get_case
/// PUT    /{id}             -> update_case
/// DELETE /{id}             -> delete_case
/// POST   /{id}/equipment   -> add_equipment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cases::list_cases).post(cases::create_case))
        .route("/stats", get(cases::case_stats))
        .route(
            "/{id}",
            get(cases::get_case)
                .put(cases::update_case)
                .delete(cases::delete_case),
        )
        .route("/{id}/equipment", post(cases::add_equipment))
}
