/// Trade endpoints

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{Json, Path},
};
use axum::{extract::State, http::StatusCode};
use tradeledger_shared::models::{CreateTrade, Trade};

/// `POST /trades`
///
/// ```json
/// {
///   "buy_account_id": 1,
///   "sell_account_id": 2,
///   "usd_amount": 100.0,
///   "btc_amount": 0.01,
///   "currency": "USD",
///   "trade_type": "buy"
/// }
/// ```
///
/// 404 if the buy account or a supplied sell account does not exist.
/// Account balances are left untouched.
pub async fn create_trade(
    State(state): State<AppState>,
    Json(req): Json<CreateTrade>,
) -> ApiResult<(StatusCode, Json<Trade>)> {
    let trade = state
        .trades
        .create_trade(
            req.buy_account_id,
            req.sell_account_id,
            req.usd_amount,
            req.btc_amount,
            req.currency,
            req.trade_type,
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("Account not found".to_string()))?;

    Ok((StatusCode::CREATED, Json(trade)))
}

/// `GET /trades/:id`
pub async fn get_trade(
    State(state): State<AppState>,
    Path(trade_id): Path<i64>,
) -> ApiResult<Json<Trade>> {
    state
        .trades
        .get_trade(trade_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Trade not found".to_string()))
}

/// `GET /accounts/:id/trades`
///
/// Trades on either side of the account, oldest first.
pub async fn list_account_trades(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
) -> ApiResult<Json<Vec<Trade>>> {
    Ok(Json(state.trades.get_trades_by_account(account_id).await?))
}
