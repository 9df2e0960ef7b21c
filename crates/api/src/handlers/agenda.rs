//! Handlers for the `/agenda` resource.
//!
//! Every user sees only their own events. Deleting requires ownership or
//! the `admin` role.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use forensic_core::error::CoreError;
use forensic_core::types::{DbId, Timestamp};
use forensic_core::validation::{optional_text, require, require_text};
use forensic_db::models::agenda::{AgendaEvent, AgendaFilter, CreateAgendaEvent};
use forensic_db::repositories::{AgendaRepo, CaseRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::response::{Keyed, MutationResponse};
use crate::state::AppState;

/// Request body for `POST /agenda`.
#[derive(Debug, Deserialize)]
pub struct CreateAgendaEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub location: Option<String>,
    pub event_type: Option<String>,
    pub case_id: Option<DbId>,
}

/// GET /api/agenda?from=&to=&case_id=
pub async fn list_events(
    State(state): State<AppState>,
    auth: AuthUser,
    AppQuery(filter): AppQuery<AgendaFilter>,
) -> AppResult<Json<Keyed<Vec<AgendaEvent>>>> {
    let events = AgendaRepo::list_for_user(&state.pool, auth.user_id, &filter).await?;
    Ok(Json(Keyed::new("events", events)))
}

/// POST /api/agenda
pub async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<CreateAgendaEventRequest>,
) -> AppResult<(StatusCode, Json<MutationResponse<AgendaEvent>>)> {
    let title = require_text("title", input.title.as_deref())?;
    let starts_at = require("starts_at", input.starts_at)?;

    if let Some(ends_at) = input.ends_at {
        if ends_at < starts_at {
            return Err(AppError::Core(CoreError::Validation(
                "ends_at must not be before starts_at".into(),
            )));
        }
    }
    if let Some(case_id) = input.case_id {
        if !CaseRepo::exists(&state.pool, case_id).await? {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Case",
                id: case_id,
            }));
        }
    }

    let event = AgendaRepo::create(
        &state.pool,
        auth.user_id,
        &CreateAgendaEvent {
            title: title.to_string(),
            description: optional_text(input.description),
            starts_at,
            ends_at: input.ends_at,
            location: optional_text(input.location),
            event_type: optional_text(input.event_type),
            case_id: input.case_id,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse::new("Event created", "event", event)),
    ))
}

/// DELETE /api/agenda/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MutationResponse<()>>> {
    let event = AgendaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AgendaEvent",
            id,
        }))?;

    auth.ensure_owner_or_admin(event.user_id, "event")?;

    AgendaRepo::delete(&state.pool, id).await?;
    Ok(Json(MutationResponse::message("Event deleted")))
}
