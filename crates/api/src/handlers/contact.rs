//! Handlers for the `/contact` resource.
//!
//! Submitting a message is public; reading the inbox requires a session.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use forensic_core::contact::is_valid_email;
use forensic_core::error::CoreError;
use forensic_core::reporting::{days_ago, RECENT_WINDOW_DAYS};
use forensic_core::types::DbId;
use forensic_core::validation::{optional_text, require_text};
use forensic_db::models::contact::{Contact, ContactStats, CreateContact};
use forensic_db::repositories::ContactRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::{ContactFilterParams, PageParams};
use crate::response::{MutationResponse, PageResponse};
use crate::state::AppState;

/// Request body for `POST /contact`.
#[derive(Debug, Deserialize)]
pub struct SubmitContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// POST /api/contact (public)
pub async fn submit_contact(
    State(state): State<AppState>,
    AppJson(input): AppJson<SubmitContactRequest>,
) -> AppResult<(StatusCode, Json<MutationResponse<()>>)> {
    let name = require_text("name", input.name.as_deref())?;
    let email = require_text("email", input.email.as_deref())?;
    let message = require_text("message", input.message.as_deref())?;

    // Surrounding whitespace fails the pattern rather than being trimmed away.
    if !input.email.as_deref().is_some_and(is_valid_email) {
        return Err(AppError::Core(CoreError::Validation(
            "Invalid email format".into(),
        )));
    }

    let contact = ContactRepo::create(
        &state.pool,
        &CreateContact {
            name: name.to_string(),
            email: email.to_string(),
            subject: optional_text(input.subject),
            message: message.to_string(),
        },
    )
    .await?;

    tracing::info!(contact_id = contact.id, "Contact message received");

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse::message(
            "Message sent. We will get in touch with you soon.",
        )),
    ))
}

/// GET /api/contact?unread_only=&page=&per_page=
pub async fn list_contacts(
    State(state): State<AppState>,
    _auth: AuthUser,
    AppQuery(filter): AppQuery<ContactFilterParams>,
    AppQuery(page): AppQuery<PageParams>,
) -> AppResult<Json<PageResponse<Contact>>> {
    let page = page.resolve();
    let items = ContactRepo::list(&state.pool, filter.unread_only, &page).await?;
    let total = ContactRepo::count(&state.pool, filter.unread_only).await?;
    Ok(Json(PageResponse::new(items, total, &page)))
}

/// PUT /api/contact/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    _auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MutationResponse<()>>> {
    if !ContactRepo::mark_read(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }));
    }
    Ok(Json(MutationResponse::message("Message marked as read")))
}

/// GET /api/contact/stats
pub async fn contact_stats(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<ContactStats>> {
    let since = days_ago(Utc::now(), RECENT_WINDOW_DAYS);
    let stats = ContactRepo::stats(&state.pool, since).await?;
    Ok(Json(stats))
}
