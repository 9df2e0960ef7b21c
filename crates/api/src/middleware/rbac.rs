//! Role checks layered on top of [`AuthUser`].
//!
//! Two roles exist: `admin` manages accounts and may act on anyone's
//! records, `lawyer` works cases. [`RequireAdmin`] gates whole endpoints;
//! [`AuthUser::ensure_owner_or_admin`] gates individual records.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use forensic_core::error::CoreError;
use forensic_core::roles::ROLE_ADMIN;
use forensic_core::types::DbId;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Extractor for admin-only endpoints: 401 without a session, 403 for any
/// role other than `admin`.
///
/// ```ignore
/// async fn list_users(RequireAdmin(admin): RequireAdmin) -> AppResult<Json<()>> {
///     tracing::info!(admin_id = admin.user_id, "listing users");
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            tracing::warn!(user_id = user.user_id, role = %user.role, "Admin endpoint refused");
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    /// Allow the record's owner or any admin; `Forbidden` for everyone else.
    pub fn ensure_owner_or_admin(&self, owner_id: DbId, what: &str) -> Result<(), AppError> {
        if self.user_id == owner_id || self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Core(CoreError::Forbidden(format!(
                "Only the owner or an admin can modify this {what}"
            ))))
        }
    }
}
