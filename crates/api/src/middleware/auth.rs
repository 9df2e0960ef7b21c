//! Session-cookie authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum_extra::extract::cookie::CookieJar;
use forensic_core::error::CoreError;
use forensic_core::types::DbId;
use forensic_db::repositories::SessionRepo;

use crate::auth::session::hash_session_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Authenticated user resolved from the session cookie.
///
/// Use this as an extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id.
    pub user_id: DbId,
    /// The user's role name (`"admin"` or `"lawyer"`).
    pub role: String,
}

/// Resolve the session cookie in `headers`, if any, to its user.
///
/// Returns `Ok(None)` when the cookie is missing, unknown, expired, or
/// belongs to a deactivated account. No query runs when there is no cookie.
pub async fn resolve_session(state: &AppState, headers: &HeaderMap) -> AppResult<Option<AuthUser>> {
    let jar = CookieJar::from_headers(headers);
    let Some(cookie) = jar.get(&state.config.session.cookie_name) else {
        return Ok(None);
    };

    let token_hash = hash_session_token(cookie.value());
    let principal = SessionRepo::find_principal(&state.pool, &token_hash).await?;

    Ok(principal.map(|p| AuthUser {
        user_id: p.user_id,
        role: p.role,
    }))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve_session(state, &parts.headers)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Authentication required".into())))
    }
}
