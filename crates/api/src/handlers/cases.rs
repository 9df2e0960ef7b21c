//! Handlers for the `/cases` resource and its equipment.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use forensic_core::cases::{priority_or_default, status_or_default, CasePriority, CaseStatus};
use forensic_core::error::CoreError;
use forensic_core::reporting::{days_ago, RECENT_WINDOW_DAYS};
use forensic_core::types::DbId;
use forensic_core::validation::{optional_text, require, require_text};
use forensic_db::models::case::{Case, CaseStats, CaseWithEquipment, CreateCase, UpdateCase};
use forensic_db::models::equipment::{CreateEquipment, Equipment};
use forensic_db::repositories::{CaseRepo, ClientRepo, EquipmentRepo, UserRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::{CaseFilterParams, PageParams};
use crate::response::{Keyed, MutationResponse, PageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /cases`.
#[derive(Debug, Deserialize)]
pub struct CreateCaseRequest {
    pub case_number: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub client_id: Option<DbId>,
    pub assigned_lawyer_id: Option<DbId>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

/// Request body for `POST /cases/{id}/equipment`.
#[derive(Debug, Deserialize)]
pub struct AddEquipmentRequest {
    pub equipment_type: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub imei: Option<String>,
    pub physical_condition: Option<String>,
    pub damage_description: Option<String>,
    pub accessories: Option<String>,
    pub received_from: Option<String>,
    pub custody_notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/cases?status=&page=&per_page=
pub async fn list_cases(
    State(state): State<AppState>,
    _auth: AuthUser,
    AppQuery(filter): AppQuery<CaseFilterParams>,
    AppQuery(page): AppQuery<PageParams>,
) -> AppResult<Json<PageResponse<Case>>> {
    let status = filter
        .status
        .as_deref()
        .map(str::parse::<CaseStatus>)
        .transpose()?;
    let status = status.map(CaseStatus::as_str);
    let page = page.resolve();

    let items = CaseRepo::list(&state.pool, status, &page).await?;
    let total = CaseRepo::count(&state.pool, status).await?;

    Ok(Json(PageResponse::new(items, total, &page)))
}

/// POST /api/cases
///
/// Every check runs before the insert, so a rejected request persists nothing.
pub async fn create_case(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<CreateCaseRequest>,
) -> AppResult<(StatusCode, Json<MutationResponse<Case>>)> {
    let case_number = require_text("case_number", input.case_number.as_deref())?;
    let title = require_text("title", input.title.as_deref())?;
    let client_id = require("client_id", input.client_id)?;
    let status = status_or_default(input.status.as_deref())?;
    let priority = priority_or_default(input.priority.as_deref())?;

    if CaseRepo::exists_case_number(&state.pool, case_number).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Case number '{case_number}' already exists"
        ))));
    }
    if !ClientRepo::exists(&state.pool, client_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id: client_id,
        }));
    }
    if let Some(lawyer_id) = input.assigned_lawyer_id {
        ensure_user_exists(&state, lawyer_id).await?;
    }

    let case = CaseRepo::create(
        &state.pool,
        &CreateCase {
            case_number: case_number.to_string(),
            title: title.to_string(),
            description: optional_text(input.description),
            client_id,
            assigned_lawyer_id: input.assigned_lawyer_id,
            status: status.as_str().to_string(),
            priority: priority.as_str().to_string(),
        },
    )
    .await?;

    tracing::info!(case_id = case.id, case_number = %case.case_number, user_id = auth.user_id, "Case created");

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse::new("Case created", "case", case)),
    ))
}

/// GET /api/cases/{id}
///
/// The case with its equipment list and the client's and lawyer's names.
pub async fn get_case(
    State(state): State<AppState>,
    _auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Keyed<CaseWithEquipment>>> {
    let case = find_case(&state, id).await?;
    let equipment = EquipmentRepo::list_for_case(&state.pool, id).await?;
    Ok(Json(Keyed::new("case", CaseWithEquipment { case, equipment })))
}

/// PUT /api/cases/{id}
pub async fn update_case(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateCase>,
) -> AppResult<Json<MutationResponse<Case>>> {
    let title = match input.title.as_deref() {
        Some(raw) => Some(require_text("title", Some(raw))?.to_string()),
        None => None,
    };
    let status = input
        .status
        .as_deref()
        .map(str::parse::<CaseStatus>)
        .transpose()?;
    let priority = input
        .priority
        .as_deref()
        .map(str::parse::<CasePriority>)
        .transpose()?;
    if let Some(lawyer_id) = input.assigned_lawyer_id {
        ensure_user_exists(&state, lawyer_id).await?;
    }

    let update = UpdateCase {
        title,
        description: input.description,
        assigned_lawyer_id: input.assigned_lawyer_id,
        status: status.map(|s| s.as_str().to_string()),
        priority: priority.map(|p| p.as_str().to_string()),
    };

    let case = CaseRepo::update(&state.pool, id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Case", id }))?;

    tracing::info!(case_id = id, status = %case.status, user_id = auth.user_id, "Case updated");

    Ok(Json(MutationResponse::new("Case updated", "case", case)))
}

/// DELETE /api/cases/{id}
///
/// Equipment registered against the case is removed with it.
pub async fn delete_case(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MutationResponse<()>>> {
    if !CaseRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Case", id }));
    }
    tracing::info!(case_id = id, user_id = auth.user_id, "Case deleted");
    Ok(Json(MutationResponse::message("Case deleted")))
}

/// POST /api/cases/{id}/equipment
pub async fn add_equipment(
    State(state): State<AppState>,
    _auth: AuthUser,
    AppPath(case_id): AppPath<DbId>,
    AppJson(input): AppJson<AddEquipmentRequest>,
) -> AppResult<(StatusCode, Json<MutationResponse<Equipment>>)> {
    let equipment_type = require_text("equipment_type", input.equipment_type.as_deref())?;

    if !CaseRepo::exists(&state.pool, case_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Case",
            id: case_id,
        }));
    }

    let equipment = EquipmentRepo::create(
        &state.pool,
        &CreateEquipment {
            case_id,
            equipment_type: equipment_type.to_string(),
            brand: optional_text(input.brand),
            model: optional_text(input.model),
            serial_number: optional_text(input.serial_number),
            imei: optional_text(input.imei),
            physical_condition: optional_text(input.physical_condition),
            damage_description: optional_text(input.damage_description),
            accessories: optional_text(input.accessories),
            received_from: optional_text(input.received_from),
            custody_notes: optional_text(input.custody_notes),
        },
    )
    .await?;

    tracing::info!(case_id, equipment_id = equipment.id, "Equipment registered");

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse::new(
            "Equipment registered",
            "equipment",
            equipment,
        )),
    ))
}

/// GET /api/cases/stats
pub async fn case_stats(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<CaseStats>> {
    let since = days_ago(Utc::now(), RECENT_WINDOW_DAYS);
    let stats = CaseRepo::stats(&state.pool, since).await?;
    Ok(Json(stats))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_case(state: &AppState, id: DbId) -> AppResult<Case> {
    CaseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Case", id }))
}

async fn ensure_user_exists(state: &AppState, id: DbId) -> AppResult<()> {
    if !UserRepo::exists(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }
    Ok(())
}
