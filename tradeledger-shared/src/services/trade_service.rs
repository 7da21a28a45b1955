/// Trade recording and lookup
///
/// Recording a trade never changes the balances of either account.

use std::sync::Arc;

use tracing::{debug, info};

use super::ServiceResult;
use crate::models::{CreateTrade, CurrencyType, Trade, TradeType};
use crate::stores::{AccountStore, TradeStore};

#[derive(Clone)]
pub struct TradeService {
    trades: Arc<dyn TradeStore>,
    accounts: Arc<dyn AccountStore>,
}

impl TradeService {
    pub fn new(trades: Arc<dyn TradeStore>, accounts: Arc<dyn AccountStore>) -> Self {
        Self { trades, accounts }
    }

    /// Records a trade between the given accounts
    ///
    /// Returns `None`, without inserting, when the buy account or a supplied
    /// sell account does not exist.
    pub async fn create_trade(
        &self,
        buy_account_id: i64,
        sell_account_id: Option<i64>,
        usd_amount: f64,
        btc_amount: f64,
        currency: CurrencyType,
        trade_type: TradeType,
    ) -> ServiceResult<Option<Trade>> {
        if self.accounts.find_account(buy_account_id).await?.is_none() {
            debug!(buy_account_id, "Trade rejected, buy account not found");
            return Ok(None);
        }

        if let Some(sell_account_id) = sell_account_id {
            if self.accounts.find_account(sell_account_id).await?.is_none() {
                debug!(sell_account_id, "Trade rejected, sell account not found");
                return Ok(None);
            }
        }

        let trade = self
            .trades
            .insert_trade(CreateTrade {
                buy_account_id,
                sell_account_id,
                usd_amount,
                btc_amount,
                currency,
                trade_type,
            })
            .await?;

        info!(
            trade_id = trade.id,
            buy_account_id,
            sell_account_id = ?sell_account_id,
            trade_type = trade_type.as_str(),
            "Trade recorded"
        );
        Ok(Some(trade))
    }

    pub async fn get_trade(&self, trade_id: i64) -> ServiceResult<Option<Trade>> {
        Ok(self.trades.find_trade(trade_id).await?)
    }

    /// Trades where the account is on either side
    pub async fn get_trades_by_account(&self, account_id: i64) -> ServiceResult<Vec<Trade>> {
        Ok(self.trades.list_trades_by_account(account_id).await?)
    }
}
