use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::IntoResponse,
    Json,
};
use models::{
    transaction_filter::{default_page, default_page_size, page_or_default, size_or_default},
    AccountRequestDraft, AlertRuleRequest, BudgetRequest, ChatMessageRequestDraft,
    FinancialProfileRequest, ManualAssetRequest, SavingsGoalRequest, TransactionFilterRequest,
    Validate,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    service::{Command, FinanceService},
    Result,
};

pub type ServiceState = Arc<dyn FinanceService>;

type JsonPayload<T> = std::result::Result<Json<T>, JsonRejection>;
type QueryPayload<T> = std::result::Result<Query<T>, QueryRejection>;
type PathId = std::result::Result<Path<Uuid>, PathRejection>;

/// Unwraps the deserialized draft and runs its required-field checks.
fn validated<D: Validate>(payload: JsonPayload<D>, shape: &'static str) -> Result<D::Valid> {
    let Json(draft) = payload.map_err(|rejection| {
        tracing::debug!(shape, error = %rejection.body_text(), "Rejected malformed body");
        rejection
    })?;

    draft.validate().map_err(|errors| {
        tracing::debug!(shape, violations = ?errors.messages(), "Rejected invalid request");
        errors.into()
    })
}

fn filter_from(query: QueryPayload<TransactionFilterRequest>) -> Result<TransactionFilterRequest> {
    let Query(filter) = query?;
    Ok(filter.validate()?)
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "finance-api"
    }))
}

/// POST /api/accounts
pub async fn create_account(
    State(service): State<ServiceState>,
    payload: JsonPayload<AccountRequestDraft>,
) -> Result<impl IntoResponse> {
    let request = validated(payload, "AccountRequest")?;
    let body = service.dispatch(Command::CreateAccount(request)).await?;
    Ok(Json(body))
}

/// PUT /api/accounts/:id
pub async fn update_account(
    State(service): State<ServiceState>,
    id: PathId,
    payload: JsonPayload<AccountRequestDraft>,
) -> Result<impl IntoResponse> {
    let Path(id) = id?;
    let request = validated(payload, "AccountRequest")?;
    let body = service.dispatch(Command::UpdateAccount { id, request }).await?;
    Ok(Json(body))
}

/// GET /api/accounts/:id/transactions
/// The path account wins over any `accountId` in the query string.
pub async fn list_account_transactions(
    State(service): State<ServiceState>,
    id: PathId,
    query: QueryPayload<TransactionFilterRequest>,
) -> Result<impl IntoResponse> {
    let Path(id) = id?;
    let filter = filter_from(query)?.for_account(id);
    let body = service.dispatch(Command::ListTransactions(filter)).await?;
    Ok(Json(body))
}

/// GET /api/transactions
pub async fn list_transactions(
    State(service): State<ServiceState>,
    query: QueryPayload<TransactionFilterRequest>,
) -> Result<impl IntoResponse> {
    let filter = filter_from(query)?;
    let body = service.dispatch(Command::ListTransactions(filter)).await?;
    Ok(Json(body))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    q: String,
    #[serde(default = "default_page", deserialize_with = "page_or_default")]
    page: i32,
    #[serde(default = "default_page_size", deserialize_with = "size_or_default")]
    size: i32,
}

/// GET /api/transactions/search?q=...
pub async fn search_transactions(
    State(service): State<ServiceState>,
    query: QueryPayload<SearchQuery>,
) -> Result<impl IntoResponse> {
    let Query(search) = query?;
    let filter = TransactionFilterRequest::search(search.q, search.page, search.size);
    let body = service.dispatch(Command::ListTransactions(filter)).await?;
    Ok(Json(body))
}

/// POST /api/chat
pub async fn send_chat_message(
    State(service): State<ServiceState>,
    payload: JsonPayload<ChatMessageRequestDraft>,
) -> Result<impl IntoResponse> {
    let request = validated(payload, "ChatMessageRequest")?;
    let body = service.dispatch(Command::SendChatMessage(request)).await?;
    Ok(Json(body))
}

/// POST /api/budgets
pub async fn create_budget(
    State(service): State<ServiceState>,
    payload: JsonPayload<BudgetRequest>,
) -> Result<impl IntoResponse> {
    let request = validated(payload, "BudgetRequest")?;
    let body = service.dispatch(Command::CreateBudget(request)).await?;
    Ok(Json(body))
}

/// PUT /api/budgets/:id
pub async fn update_budget(
    State(service): State<ServiceState>,
    id: PathId,
    payload: JsonPayload<BudgetRequest>,
) -> Result<impl IntoResponse> {
    let Path(id) = id?;
    let request = validated(payload, "BudgetRequest")?;
    let body = service.dispatch(Command::UpdateBudget { id, request }).await?;
    Ok(Json(body))
}

/// POST /api/goals
pub async fn create_savings_goal(
    State(service): State<ServiceState>,
    payload: JsonPayload<SavingsGoalRequest>,
) -> Result<impl IntoResponse> {
    let request = validated(payload, "SavingsGoalRequest")?;
    let body = service.dispatch(Command::CreateSavingsGoal(request)).await?;
    Ok(Json(body))
}

/// PUT /api/goals/:id
pub async fn update_savings_goal(
    State(service): State<ServiceState>,
    id: PathId,
    payload: JsonPayload<SavingsGoalRequest>,
) -> Result<impl IntoResponse> {
    let Path(id) = id?;
    let request = validated(payload, "SavingsGoalRequest")?;
    let body = service
        .dispatch(Command::UpdateSavingsGoal { id, request })
        .await?;
    Ok(Json(body))
}

/// POST /api/alert-rules
pub async fn create_alert_rule(
    State(service): State<ServiceState>,
    payload: JsonPayload<AlertRuleRequest>,
) -> Result<impl IntoResponse> {
    let request = validated(payload, "AlertRuleRequest")?;
    let body = service.dispatch(Command::CreateAlertRule(request)).await?;
    Ok(Json(body))
}

/// PUT /api/alert-rules/:id
pub async fn update_alert_rule(
    State(service): State<ServiceState>,
    id: PathId,
    payload: JsonPayload<AlertRuleRequest>,
) -> Result<impl IntoResponse> {
    let Path(id) = id?;
    let request = validated(payload, "AlertRuleRequest")?;
    let body = service
        .dispatch(Command::UpdateAlertRule { id, request })
        .await?;
    Ok(Json(body))
}

/// PUT /api/profile
pub async fn update_financial_profile(
    State(service): State<ServiceState>,
    payload: JsonPayload<FinancialProfileRequest>,
) -> Result<impl IntoResponse> {
    let request = validated(payload, "FinancialProfileRequest")?;
    let body = service
        .dispatch(Command::UpdateFinancialProfile(request))
        .await?;
    Ok(Json(body))
}

/// POST /api/networth/assets
pub async fn create_manual_asset(
    State(service): State<ServiceState>,
    payload: JsonPayload<ManualAssetRequest>,
) -> Result<impl IntoResponse> {
    let request = validated(payload, "ManualAssetRequest")?;
    let body = service.dispatch(Command::CreateManualAsset(request)).await?;
    Ok(Json(body))
}

/// PUT /api/networth/assets/:id
pub async fn update_manual_asset(
    State(service): State<ServiceState>,
    id: PathId,
    payload: JsonPayload<ManualAssetRequest>,
) -> Result<impl IntoResponse> {
    let Path(id) = id?;
    let request = validated(payload, "ManualAssetRequest")?;
    let body = service
        .dispatch(Command::UpdateManualAsset { id, request })
        .await?;
    Ok(Json(body))
}
