//! Handlers for the `/auth` resource (login, logout, check, profile).

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use chrono::{Duration, Utc};
use forensic_core::error::CoreError;
use forensic_core::validation::require_text;
use forensic_db::models::session::CreateSession;
use forensic_db::models::user::UserResponse;
use forensic_db::repositories::{SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::password::{verify_dummy_password, verify_password};
use crate::auth::session::{generate_session_token, hash_session_token, removal_cookie, session_cookie};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::{resolve_session, AuthUser};
use crate::response::{Keyed, MutationResponse};
use crate::state::AppState;

/// Returned for unknown email, wrong password, and deactivated account alike.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response body for `GET /auth/check`.
#[derive(Debug, Serialize)]
pub struct AuthCheckResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Verify email + password and start a session. The session token is set
/// as an HttpOnly cookie; the body carries the public user record.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<(CookieJar, Json<MutationResponse<UserResponse>>)> {
    let email = require_text("email", input.email.as_deref())?;
    let password = input
        .password
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Validation("password is required".into())))?;

    let pruned = SessionRepo::cleanup_expired(&state.pool).await?;
    if pruned > 0 {
        tracing::debug!(pruned, "Pruned expired sessions");
    }

    let Some(user) = UserRepo::find_by_email(&state.pool, email).await? else {
        verify_dummy_password(password);
        tracing::warn!(%email, "Login failed: unknown email");
        return Err(invalid_credentials());
    };

    let password_valid = verify_password(password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::warn!(user_id = user.id, "Login failed: wrong password");
        return Err(invalid_credentials());
    }

    if !user.is_active {
        tracing::warn!(user_id = user.id, "Login failed: account deactivated");
        return Err(invalid_credentials());
    }

    let (token, token_hash) = generate_session_token();
    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            token_hash,
            expires_at: Utc::now() + Duration::hours(state.config.session.ttl_hours),
        },
    )
    .await?;

    tracing::info!(user_id = user.id, role = %user.role, "User logged in");

    let jar = jar.add(session_cookie(&state.config.session, token));
    Ok((
        jar,
        Json(MutationResponse::new(
            "Login successful",
            "user",
            UserResponse::from(&user),
        )),
    ))
}

/// POST /api/auth/logout
///
/// End the session named by the cookie, if any, and clear the cookie.
/// Always succeeds.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<MutationResponse<()>>)> {
    if let Some(cookie) = jar.get(&state.config.session.cookie_name) {
        let token_hash = hash_session_token(cookie.value());
        if SessionRepo::delete_by_token_hash(&state.pool, &token_hash).await? {
            tracing::info!("Session ended");
        }
    }

    let jar = jar.remove(removal_cookie(&state.config.session));
    Ok((jar, Json(MutationResponse::message("Logout successful"))))
}

/// GET /api/auth/check
///
/// Report whether the caller has a live session. Never fails for a missing
/// or stale cookie.
pub async fn check(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<AuthCheckResponse>> {
    let user = match resolve_session(&state, &headers).await? {
        Some(auth) => UserRepo::find_by_id(&state.pool, auth.user_id)
            .await?
            .map(|u| UserResponse::from(&u)),
        None => None,
    };

    Ok(Json(AuthCheckResponse {
        authenticated: user.is_some(),
        user,
    }))
}

/// GET /api/auth/profile
pub async fn profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<Keyed<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;
    Ok(Json(Keyed::new("user", UserResponse::from(&user))))
}
