/// Account model and database operations
///
/// An account holds a USD and a BTC balance for one user. Balances are plain
/// numbers here: nothing in the ledger adjusts them when trades are recorded.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE account_type AS ENUM ('buy', 'sell', 'deposit', 'withdraw');
///
/// CREATE TABLE accounts (
///     id BIGSERIAL PRIMARY KEY,
///     user_id BIGINT NOT NULL REFERENCES users (id) ON DELETE CASCADE,
///     balance_usd DOUBLE PRECISION NOT NULL DEFAULT 0.0,
///     balance_btc DOUBLE PRECISION NOT NULL DEFAULT 0.0,
///     type account_type,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// What an account is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Buy,
    Sell,
    Deposit,
    Withdraw,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Buy => "buy",
            AccountType::Sell => "sell",
            AccountType::Deposit => "deposit",
            AccountType::Withdraw => "withdraw",
        }
    }
}

/// A balance-holding account owned by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    #[serde(rename = "account_id")]
    pub id: i64,

    pub user_id: i64,

    pub balance_usd: f64,

    pub balance_btc: f64,

    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub account_type: Option<AccountType>,

    pub created_at: DateTime<Utc>,

    /// Refreshed on every write
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAccount {
    pub user_id: i64,

    #[serde(default)]
    pub balance_usd: f64,

    #[serde(default)]
    pub balance_btc: f64,

    #[serde(rename = "type", default)]
    pub account_type: Option<AccountType>,
}

/// Partial account update
///
/// `None` leaves the field as it is. The type cannot be cleared once set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateAccount {
    pub balance_usd: Option<f64>,

    pub balance_btc: Option<f64>,

    #[serde(rename = "type")]
    pub account_type: Option<AccountType>,
}

impl UpdateAccount {
    /// Copies the supplied fields onto `account`
    pub fn apply_to(&self, account: &mut Account) {
        if let Some(balance_usd) = self.balance_usd {
            account.balance_usd = balance_usd;
        }
        if let Some(balance_btc) = self.balance_btc {
            account.balance_btc = balance_btc;
        }
        if let Some(account_type) = self.account_type {
            account.account_type = Some(account_type);
        }
    }
}

impl Account {
    pub async fn create(pool: &PgPool, data: CreateAccount) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (user_id, balance_usd, balance_btc, "type")
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, balance_usd, balance_btc, "type", created_at, updated_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.balance_usd)
        .bind(data.balance_btc)
        .bind(data.account_type)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Account>(
            r#"
            SELECT id, user_id, balance_usd, balance_btc, "type", created_at, updated_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Writes the mutable columns of `account` back and bumps `updated_at`
    ///
    /// Returns `None` if the row no longer exists. Last writer wins.
    pub async fn save(pool: &PgPool, account: &Account) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Account>(
            r#"
            UPDATE accounts
            SET balance_usd = $2, balance_btc = $3, "type" = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, balance_usd, balance_btc, "type", created_at, updated_at
            "#,
        )
        .bind(account.id)
        .bind(account.balance_usd)
        .bind(account.balance_btc)
        .bind(account.account_type)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Lists a user's accounts, oldest first
    pub async fn list_by_user(pool: &PgPool, user_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Account>(
            r#"
            SELECT id, user_id, balance_usd, balance_btc, "type", created_at, updated_at
            FROM accounts
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_account() -> Account {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        Account {
            id: 1,
            user_id: 1,
            balance_usd: 1000.0,
            balance_btc: 0.1,
            account_type: Some(AccountType::Buy),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_partial_update_only_touches_supplied_fields() {
        let mut account = sample_account();

        UpdateAccount {
            balance_btc: Some(0.5),
            ..Default::default()
        }
        .apply_to(&mut account);

        assert_eq!(account.balance_usd, 1000.0);
        assert_eq!(account.balance_btc, 0.5);
        assert_eq!(account.account_type, Some(AccountType::Buy));
    }

    #[test]
    fn test_empty_update_is_noop() {
        let update = UpdateAccount::default();

        let mut account = sample_account();
        update.apply_to(&mut account);
        assert_eq!(account, sample_account());
    }

    #[test]
    fn test_account_json_shape() {
        let json = serde_json::to_value(sample_account()).unwrap();

        assert_eq!(json["account_id"], 1);
        assert_eq!(json["user_id"], 1);
        assert_eq!(json["balance_usd"], 1000.0);
        assert_eq!(json["balance_btc"], 0.1);
        assert_eq!(json["type"], "buy");
        assert_eq!(json["created_at"], "2024-01-02T03:04:05Z");
        assert_eq!(json["updated_at"], "2024-01-02T03:04:05Z");
    }

    #[test]
    fn test_create_account_defaults_balances() {
        let data: CreateAccount = serde_json::from_str(r#"{"user_id": 5}"#).unwrap();

        assert_eq!(data.user_id, 5);
        assert_eq!(data.balance_usd, 0.0);
        assert_eq!(data.balance_btc, 0.0);
        assert_eq!(data.account_type, None);
    }

    #[test]
    fn test_account_type_wire_values() {
        for (ty, wire) in [
            (AccountType::Buy, "buy"),
            (AccountType::Sell, "sell"),
            (AccountType::Deposit, "deposit"),
            (AccountType::Withdraw, "withdraw"),
        ] {
            assert_eq!(ty.as_str(), wire);
            assert_eq!(serde_json::to_value(ty).unwrap(), wire);
        }
    }
}
