//! Handlers for the `/users` resource (user administration).
//!
//! All handlers require the `admin` role via [`RequireAdmin`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use forensic_core::contact::is_valid_email;
use forensic_core::error::CoreError;
use forensic_core::roles::{is_valid_role, DEFAULT_ROLE};
use forensic_core::types::DbId;
use forensic_core::validation::{optional_text, require_text};
use forensic_db::models::user::{CreateUser, UpdateUser, UserResponse};
use forensic_db::repositories::UserRepo;
use serde::Deserialize;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{Keyed, MutationResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Request body for `PUT /users/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Keyed<Vec<UserResponse>>>> {
    let users = UserRepo::list(&state.pool).await?;
    let users = users.iter().map(UserResponse::from).collect();
    Ok(Json(Keyed::new("users", users)))
}

/// POST /api/users
///
/// Create an account. The password is checked for length and stored as an
/// Argon2id hash; the role defaults to `lawyer`.
pub async fn create_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(input): AppJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<MutationResponse<UserResponse>>)> {
    let full_name = require_text("full_name", input.full_name.as_deref())?;
    let email = require_text("email", input.email.as_deref())?;
    let password = input.password.as_deref().unwrap_or_default();

    check_email(email)?;
    validate_password_strength(password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let role = input.role.as_deref().unwrap_or(DEFAULT_ROLE);
    check_role(role)?;

    if UserRepo::find_by_email(&state.pool, email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "A user with email '{email}' already exists"
        ))));
    }

    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            full_name: full_name.to_string(),
            email: email.to_string(),
            password_hash,
            role: role.to_string(),
        },
    )
    .await?;

    tracing::info!(user_id = user.id, created_by = admin.user_id, role = %user.role, "User created");

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse::new(
            "User created",
            "user",
            UserResponse::from(&user),
        )),
    ))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Keyed<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(Keyed::new("user", UserResponse::from(&user))))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateUserRequest>,
) -> AppResult<Json<MutationResponse<UserResponse>>> {
    let email = optional_text(input.email);
    if let Some(email) = &email {
        check_email(email)?;
        if let Some(other) = UserRepo::find_by_email(&state.pool, email).await? {
            if other.id != id {
                return Err(AppError::Core(CoreError::Conflict(format!(
                    "A user with email '{email}' already exists"
                ))));
            }
        }
    }
    if let Some(role) = &input.role {
        check_role(role)?;
    }

    let update = UpdateUser {
        full_name: optional_text(input.full_name),
        email,
        role: input.role,
        is_active: input.is_active,
    };

    let user = UserRepo::update(&state.pool, id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(MutationResponse::new(
        "User updated",
        "user",
        UserResponse::from(&user),
    )))
}

/// DELETE /api/users/{id}
///
/// Sets `is_active = false`; the row itself is kept.
pub async fn deactivate_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MutationResponse<()>>> {
    if UserRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }
    UserRepo::deactivate(&state.pool, id).await?;
    tracing::info!(user_id = id, deactivated_by = admin.user_id, "User deactivated");
    Ok(Json(MutationResponse::message("User deactivated")))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn check_email(email: &str) -> Result<(), AppError> {
    if !is_valid_email(email) {
        return Err(AppError::Core(CoreError::Validation(
            "Invalid email format".into(),
        )));
    }
    Ok(())
}

fn check_role(role: &str) -> Result<(), AppError> {
    if !is_valid_role(role) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid role '{role}'. Expected one of: admin, lawyer"
        ))));
    }
    Ok(())
}
