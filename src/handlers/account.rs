//! Account CRUD handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::extractors::{require_content_type, AccountId, APPLICATION_JSON};
use crate::model::{Account, NewAccount};
use crate::response::{created, ok};
use crate::service::AccountForm;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

fn parse_json(body: &[u8]) -> Result<Value, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(format!("invalid JSON body: {}", e)))
}

/// `null`, `false`, `0`, `""`, `[]` and `{}` count as no payload at all.
fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// POST /accounts
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    tracing::info!("Request to create an Account");
    require_content_type(&headers, APPLICATION_JSON)?;
    let payload = parse_json(&body)?;
    let form = AccountForm::from_json(&payload).map_err(AppError::InvalidPayload)?;
    let today = chrono::Local::now().date_naive();
    let account = state.store.create(NewAccount::from_form(form, today)).await?;
    tracing::info!(id = account.id, "Account created");
    let location = account.location();
    Ok(created(&location, account))
}

/// GET /accounts
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Request to list Accounts");
    let accounts = state.store.all().await?;
    if accounts.is_empty() {
        return Err(AppError::NotFound("accounts not found"));
    }
    Ok(ok(accounts))
}

/// GET /accounts/:id
pub async fn read(
    State(state): State<AppState>,
    AccountId(id): AccountId,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(id, "Request to read an Account");
    let account = state
        .store
        .find(id)
        .await?
        .ok_or(AppError::NotFound("account not found"))?;
    Ok(ok(account))
}

/// PUT /accounts/:id. The whole required field set must be sent.
pub async fn update(
    State(state): State<AppState>,
    AccountId(id): AccountId,
    body: Bytes,
) -> Result<Json<Account>, AppError> {
    tracing::info!(id, "Request to update an Account");
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::MethodNotAllowed("id not found"));
    }
    let payload = parse_json(&body)?;
    if is_empty_payload(&payload) {
        return Err(AppError::MethodNotAllowed("id not found"));
    }

    let mut account = state
        .store
        .find(id)
        .await?
        .ok_or(AppError::NotFound("id not found"))?;
    let form = AccountForm::from_json(&payload).map_err(AppError::Attribute)?;
    account.apply(form);

    let updated = state.store.update(&account).await?;
    Ok(Json(updated))
}

/// DELETE /accounts/:id
pub async fn delete(
    State(state): State<AppState>,
    AccountId(id): AccountId,
) -> Result<StatusCode, AppError> {
    tracing::info!(id, "Request to delete an Account");
    if state.store.find(id).await?.is_none() {
        return Err(AppError::NotFound("id not found"));
    }
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
