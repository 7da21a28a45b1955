/// Trade model and database operations
///
/// A trade records that a buy account (and optionally a sell account)
/// exchanged `btc_amount` BTC for `usd_amount` USD. `trade_type` says which
/// side initiated it: `buy` means the buy account acquired BTC, `sell` means
/// the sell account disposed of it. Recording a trade does not move any
/// balances.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE trade_type AS ENUM ('buy', 'sell');
/// CREATE TYPE currency_type AS ENUM ('BTC', 'USD');
///
/// CREATE TABLE trades (
///     id BIGSERIAL PRIMARY KEY,
///     buy_account_id BIGINT NOT NULL REFERENCES accounts (id) ON DELETE CASCADE,
///     sell_account_id BIGINT REFERENCES accounts (id) ON DELETE SET NULL,
///     usd_amount DOUBLE PRECISION NOT NULL,
///     btc_amount DOUBLE PRECISION NOT NULL,
///     currency currency_type NOT NULL,
///     trade_type trade_type NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Direction of a trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "trade_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TradeType {
    Buy,
    Sell,
}

impl TradeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeType::Buy => "buy",
            TradeType::Sell => "sell",
        }
    }
}

/// Currency a trade is denominated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "currency_type", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyType {
    Btc,
    Usd,
}

impl CurrencyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyType::Btc => "BTC",
            CurrencyType::Usd => "USD",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Trade {
    #[serde(rename = "trade_id")]
    pub id: i64,

    pub buy_account_id: i64,

    pub sell_account_id: Option<i64>,

    pub usd_amount: f64,

    pub btc_amount: f64,

    pub currency: CurrencyType,

    pub trade_type: TradeType,

    pub created_at: DateTime<Utc>,
}

/// Input for recording a new trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTrade {
    pub buy_account_id: i64,

    #[serde(default)]
    pub sell_account_id: Option<i64>,

    pub usd_amount: f64,

    pub btc_amount: f64,

    pub currency: CurrencyType,

    pub trade_type: TradeType,
}

impl Trade {
    pub async fn create(pool: &PgPool, data: CreateTrade) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Trade>(
            r#"
            INSERT INTO trades (buy_account_id, sell_account_id, usd_amount, btc_amount, currency, trade_type)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, buy_account_id, sell_account_id, usd_amount, btc_amount,
                      currency, trade_type, created_at
            "#,
        )
        .bind(data.buy_account_id)
        .bind(data.sell_account_id)
        .bind(data.usd_amount)
        .bind(data.btc_amount)
        .bind(data.currency)
        .bind(data.trade_type)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Trade>(
            r#"
            SELECT id, buy_account_id, sell_account_id, usd_amount, btc_amount,
                   currency, trade_type, created_at
            FROM trades
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Lists trades where the account is on either side, oldest first
    pub async fn list_by_account(pool: &PgPool, account_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Trade>(
            r#"
            SELECT id, buy_account_id, sell_account_id, usd_amount, btc_amount,
                   currency, trade_type, created_at
            FROM trades
            WHERE buy_account_id = $1 OR sell_account_id = $1
            ORDER BY id
            "#,
        )
        .bind(account_id)
        .fetch_all(pool)
        .await
    }
}
