pub mod agenda;
pub mod auth;
pub mod cases;
pub mod clients;
pub mod contact;
pub mod dashboard;
pub mod health;
pub mod spa;
pub mod transactions;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                                 service health (public)
///
/// /auth/login                             login (public)
/// /auth/logout                            logout (public, idempotent)
/// /auth/check                             session check (public)
/// /auth/profile                           current user
///
/// /users                                  list, create (admin only)
/// /users/{id}                             get, update, deactivate (admin only)
///
/// /cases                                  list, create
/// /cases/stats                            case counters
/// /cases/{id}                             get, update, delete
/// /cases/{id}/equipment                   register equipment
///
/// /clients                                list, create
/// /clients/stats                          client counters
/// /clients/{id}                           get, update, delete
///
/// /contact                                submit (public), list
/// /contact/stats                          inbox counters
/// /contact/{id}/read                      mark read
///
/// /dashboard/stats                        headline counters
/// /dashboard/recent-activity              merged activity feed
/// /dashboard/pending-cases                open cases with age
/// /dashboard/charts/cases-by-month        monthly case series
/// /dashboard/charts/cases-by-status       status breakdown
/// /dashboard/charts/revenue-by-month      monthly income series
///
/// /agenda                                 list own events, create
/// /agenda/{id}                            delete (owner or admin)
///
/// /transactions                           list, record
/// ```
///
/// Unknown paths under `/api` answer with a JSON 404 rather than the SPA.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/cases", cases::router())
        .nest("/clients", clients::router())
        .nest("/contact", contact::router())
        .nest("/dashboard", dashboard::router())
        .nest("/agenda", agenda::router())
        .nest("/transactions", transactions::router())
        .fallback(spa::api_not_found)
}
