//! Handlers for the `/transactions` resource (income and expense ledger).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use forensic_core::error::CoreError;
use forensic_core::ledger::{validate_amount, TransactionKind};
use forensic_core::types::{DbId, Timestamp};
use forensic_core::validation::{require, require_text};
use forensic_db::models::transaction::{CreateTransaction, Transaction};
use forensic_db::repositories::{CaseRepo, TransactionRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::{PageParams, TransactionFilterParams};
use crate::response::{MutationResponse, PageResponse};
use crate::state::AppState;

/// Request body for `POST /transactions`.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub concept: Option<String>,
    pub amount: Option<f64>,
    pub case_id: Option<DbId>,
    pub occurred_at: Option<Timestamp>,
}

/// GET /api/transactions?case_id=&type=&page=&per_page=
pub async fn list_transactions(
    State(state): State<AppState>,
    _auth: AuthUser,
    AppQuery(filter): AppQuery<TransactionFilterParams>,
    AppQuery(page): AppQuery<PageParams>,
) -> AppResult<Json<PageResponse<Transaction>>> {
    let kind = filter
        .kind
        .as_deref()
        .map(str::parse::<TransactionKind>)
        .transpose()?
        .map(TransactionKind::as_str);
    let page = page.resolve();

    let items = TransactionRepo::list(&state.pool, filter.case_id, kind, &page).await?;
    let total = TransactionRepo::count(&state.pool, filter.case_id, kind).await?;

    Ok(Json(PageResponse::new(items, total, &page)))
}

/// POST /api/transactions
///
/// The caller is recorded as the author.
pub async fn create_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<CreateTransactionRequest>,
) -> AppResult<(StatusCode, Json<MutationResponse<Transaction>>)> {
    let kind: TransactionKind = require_text("type", input.kind.as_deref())?.parse()?;
    let concept = require_text("concept", input.concept.as_deref())?;
    let amount = validate_amount(require("amount", input.amount)?)?;

    if let Some(case_id) = input.case_id {
        if !CaseRepo::exists(&state.pool, case_id).await? {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Case",
                id: case_id,
            }));
        }
    }

    let transaction = TransactionRepo::create(
        &state.pool,
        &CreateTransaction {
            case_id: input.case_id,
            kind: kind.as_str().to_string(),
            concept: concept.to_string(),
            amount,
            occurred_at: input.occurred_at,
            user_id: auth.user_id,
        },
    )
    .await?;

    tracing::info!(
        transaction_id = transaction.id,
        kind = %kind,
        amount,
        user_id = auth.user_id,
        "Transaction recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse::new(
            "Transaction recorded",
            "transaction",
            transaction,
        )),
    ))
}
