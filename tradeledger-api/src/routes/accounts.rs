/// Account endpoints
///
/// All of these sit behind the Bearer token layer. A missing account is a
/// 404; nothing is written in that case.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{Json, Path},
};
use axum::{extract::State, http::StatusCode};
use tradeledger_shared::models::{Account, CreateAccount, UpdateAccount};

fn account_not_found() -> ApiError {
    ApiError::NotFound("Account not found".to_string())
}

/// `POST /accounts`
///
/// ```json
/// { "user_id": 1, "balance_usd": 1000.0, "balance_btc": 0.0, "type": "buy" }
/// ```
///
/// Balances default to 0 and `type` to null. An unknown `user_id` is a 404.
pub async fn create_account(
    State(state): State<AppState>,
    Json(req): Json<CreateAccount>,
) -> ApiResult<(StatusCode, Json<Account>)> {
    let account = state
        .accounts
        .create_account(req.user_id, req.balance_usd, req.balance_btc, req.account_type)
        .await?;

    Ok((StatusCode::CREATED, Json(account)))
}

/// `GET /accounts/:id`
pub async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
) -> ApiResult<Json<Account>> {
    state
        .accounts
        .get_account(account_id)
        .await?
        .map(Json)
        .ok_or_else(account_not_found)
}

/// `PATCH /accounts/:id`
///
/// Only the fields present in the body change.
pub async fn update_account(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
    Json(req): Json<UpdateAccount>,
) -> ApiResult<Json<Account>> {
    state
        .accounts
        .update_account(account_id, req)
        .await?
        .map(Json)
        .ok_or_else(account_not_found)
}

/// `DELETE /accounts/:id`
pub async fn delete_account(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
) -> ApiResult<StatusCode> {
    if state.accounts.delete_account(account_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(account_not_found())
    }
}

/// `GET /users/:id/accounts`
///
/// An unknown user simply has no accounts.
pub async fn list_user_accounts(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<Vec<Account>>> {
    Ok(Json(state.accounts.get_accounts_by_user(user_id).await?))
}
