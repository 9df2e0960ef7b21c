use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use forensic_core::error::CoreError;
use serde_json::json;

/// Error type returned by every handler.
///
/// Rendered as `{"error": <message>, "code": <CODE>}`. Validation failures
/// and conflicts are both 400; the `code` tells them apart.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain error raised by validation or a missing entity.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Query failure; constraint violations are classified, the rest is a 500.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::BAD_REQUEST, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a sqlx error onto the API's status codes.
///
/// Named constraints from the migrations are reported in user-facing
/// wording. Anything unrecognised is a sanitized 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    let sqlx::Error::Database(db_err) = err else {
        if matches!(err, sqlx::Error::RowNotFound) {
            return (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Resource not found".to_string(),
            );
        }
        tracing::error!(error = %err, "Database error");
        return internal();
    };

    let constraint = db_err.constraint().unwrap_or_default();
    match db_err.code().as_deref() {
        // unique_violation
        Some("23505") if constraint.starts_with("uq_") => (
            StatusCode::BAD_REQUEST,
            "CONFLICT",
            duplicate_message(constraint),
        ),
        // foreign_key_violation
        Some("23503") => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{} not found", referenced_entity(constraint)),
        ),
        // check_violation
        Some("23514") => (
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            format!("Value rejected by {constraint}"),
        ),
        _ => {
            tracing::error!(error = %db_err, constraint, "Database error");
            internal()
        }
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

fn duplicate_message(constraint: &str) -> String {
    match constraint {
        "uq_cases_case_number" => "Case number already exists".to_string(),
        "uq_clients_email" => "A client with this email already exists".to_string(),
        "uq_users_email" => "A user with this email already exists".to_string(),
        other => format!("Duplicate value violates {other}"),
    }
}

/// Entity named by a default Postgres foreign-key constraint name such as
/// `cases_client_id_fkey`.
fn referenced_entity(constraint: &str) -> &'static str {
    if constraint.contains("client_id") {
        "Client"
    } else if constraint.contains("assigned_lawyer_id") {
        "Lawyer"
    } else if constraint.contains("case_id") {
        "Case"
    } else if constraint.contains("user_id") {
        "User"
    } else {
        "Referenced record"
    }
}
