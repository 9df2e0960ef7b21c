//! Handlers for the `/clients` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use forensic_core::error::CoreError;
use forensic_core::reporting::{days_ago, RECENT_WINDOW_DAYS};
use forensic_core::types::DbId;
use forensic_core::validation::{optional_text, require_text};
use forensic_db::models::client::{
    Client, ClientDeletion, ClientStats, ClientWithCases, CreateClient, UpdateClient,
};
use forensic_db::repositories::{CaseRepo, ClientRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::{ClientSearchParams, PageParams};
use crate::response::{Keyed, MutationResponse, PageResponse};
use crate::state::AppState;

/// Request body for `POST /clients`.
#[derive(Debug, Deserialize)]
pub struct CreateClientRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// POST /api/clients
pub async fn create_client(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<CreateClientRequest>,
) -> AppResult<(StatusCode, Json<MutationResponse<Client>>)> {
    let full_name = require_text("full_name", input.full_name.as_deref())?;
    let email = require_text("email", input.email.as_deref())?;

    if ClientRepo::email_taken(&state.pool, email, None).await? {
        return Err(email_conflict(email));
    }

    let client = ClientRepo::create(
        &state.pool,
        &CreateClient {
            full_name: full_name.to_string(),
            email: email.to_string(),
            phone: optional_text(input.phone),
            address: optional_text(input.address),
        },
    )
    .await?;

    tracing::info!(client_id = client.id, user_id = auth.user_id, "Client created");

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse::new("Client created", "client", client)),
    ))
}

/// GET /api/clients?search=&page=&per_page=
pub async fn list_clients(
    State(state): State<AppState>,
    _auth: AuthUser,
    AppQuery(filter): AppQuery<ClientSearchParams>,
    AppQuery(page): AppQuery<PageParams>,
) -> AppResult<Json<PageResponse<Client>>> {
    let search = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let page = page.resolve();

    let items = ClientRepo::list(&state.pool, search, &page).await?;
    let total = ClientRepo::count(&state.pool, search).await?;

    Ok(Json(PageResponse::new(items, total, &page)))
}

/// GET /api/clients/{id}
///
/// The client together with every case that references it.
pub async fn get_client(
    State(state): State<AppState>,
    _auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Keyed<ClientWithCases>>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Client", id }))?;
    let cases = CaseRepo::list_for_client(&state.pool, id).await?;
    Ok(Json(Keyed::new("client", ClientWithCases { client, cases })))
}

/// PUT /api/clients/{id}
pub async fn update_client(
    State(state): State<AppState>,
    _auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateClient>,
) -> AppResult<Json<MutationResponse<Client>>> {
    let full_name = match input.full_name.as_deref() {
        Some(raw) => Some(require_text("full_name", Some(raw))?.to_string()),
        None => None,
    };
    let email = match input.email.as_deref() {
        Some(raw) => {
            let email = require_text("email", Some(raw))?;
            if ClientRepo::email_taken(&state.pool, email, Some(id)).await? {
                return Err(email_conflict(email));
            }
            Some(email.to_string())
        }
        None => None,
    };

    let update = UpdateClient {
        full_name,
        email,
        phone: input.phone,
        address: input.address,
    };

    let client = ClientRepo::update(&state.pool, id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Client", id }))?;

    Ok(Json(MutationResponse::new("Client updated", "client", client)))
}

/// DELETE /api/clients/{id}
///
/// Refused while the client has any case that is not closed. Closed cases
/// survive the delete with no client.
pub async fn delete_client(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MutationResponse<()>>> {
    match ClientRepo::delete_unless_open_cases(&state.pool, id).await? {
        ClientDeletion::Deleted => {
            tracing::info!(client_id = id, user_id = auth.user_id, "Client deleted");
            Ok(Json(MutationResponse::message("Client deleted")))
        }
        ClientDeletion::NotFound => {
            Err(AppError::Core(CoreError::NotFound { entity: "Client", id }))
        }
        ClientDeletion::Blocked { open_cases } => Err(AppError::Core(CoreError::Validation(
            format!("Cannot delete client: {open_cases} active case(s) still open"),
        ))),
    }
}

/// GET /api/clients/stats
pub async fn client_stats(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<ClientStats>> {
    let since = days_ago(Utc::now(), RECENT_WINDOW_DAYS);
    let stats = ClientRepo::stats(&state.pool, since).await?;
    Ok(Json(stats))
}

fn email_conflict(email: &str) -> AppError {
    AppError::Core(CoreError::Conflict(format!(
        "A client with email '{email}' already exists"
    )))
}
