/// In-memory store
///
/// Mirrors the PostgreSQL schema closely enough for tests and local runs:
/// ids are assigned sequentially from 1, emails are unique, foreign keys are
/// checked on insert, and deletes cascade the way the migrations declare
/// (`ON DELETE CASCADE` for the buy side, `ON DELETE SET NULL` for the sell
/// side).

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{AccountStore, StoreError, StoreResult, TradeStore, UserStore};
use crate::models::{Account, CreateAccount, CreateTrade, CreateUser, Trade, User};

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    accounts: BTreeMap<i64, Account>,
    trades: BTreeMap<i64, Trade>,
    last_user_id: i64,
    last_account_id: i64,
    last_trade_id: i64,
}

/// Store holding every table in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn fk_violation(constraint: &str) -> StoreError {
    StoreError::ForeignKeyViolation {
        constraint: constraint.to_string(),
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, data: CreateUser) -> StoreResult<User> {
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.email == data.email) {
            return Err(StoreError::UniqueViolation {
                constraint: "users_email_key".to_string(),
            });
        }

        tables.last_user_id += 1;
        let user = User {
            id: tables.last_user_id,
            email: data.email,
            password_hash: data.password_hash,
            name: data.name,
            created_at: Utc::now(),
        };
        tables.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_user(&self, id: i64) -> StoreResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn insert_account(&self, data: CreateAccount) -> StoreResult<Account> {
        let mut tables = self.tables.write().await;

        if !tables.users.contains_key(&data.user_id) {
            return Err(fk_violation("accounts_user_id_fkey"));
        }

        tables.last_account_id += 1;
        let now = Utc::now();
        let account = Account {
            id: tables.last_account_id,
            user_id: data.user_id,
            balance_usd: data.balance_usd,
            balance_btc: data.balance_btc,
            account_type: data.account_type,
            created_at: now,
            updated_at: now,
        };
        tables.accounts.insert(account.id, account.clone());

        Ok(account)
    }

    async fn find_account(&self, id: i64) -> StoreResult<Option<Account>> {
        Ok(self.tables.read().await.accounts.get(&id).cloned())
    }

    async fn save_account(&self, account: &Account) -> StoreResult<Option<Account>> {
        let mut tables = self.tables.write().await;

        Ok(tables.accounts.get_mut(&account.id).map(|stored| {
            stored.balance_usd = account.balance_usd;
            stored.balance_btc = account.balance_btc;
            stored.account_type = account.account_type;
            stored.updated_at = Utc::now();
            stored.clone()
        }))
    }

    async fn delete_account(&self, id: i64) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;

        if tables.accounts.remove(&id).is_none() {
            return Ok(false);
        }

        tables.trades.retain(|_, trade| trade.buy_account_id != id);
        for trade in tables.trades.values_mut() {
            if trade.sell_account_id == Some(id) {
                trade.sell_account_id = None;
            }
        }

        Ok(true)
    }

    async fn list_accounts_by_user(&self, user_id: i64) -> StoreResult<Vec<Account>> {
        let tables = self.tables.read().await;
        Ok(tables
            .accounts
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TradeStore for MemoryStore {
    async fn insert_trade(&self, data: CreateTrade) -> StoreResult<Trade> {
        let mut tables = self.tables.write().await;

        if !tables.accounts.contains_key(&data.buy_account_id) {
            return Err(fk_violation("trades_buy_account_id_fkey"));
        }
        if let Some(sell_account_id) = data.sell_account_id {
            if !tables.accounts.contains_key(&sell_account_id) {
                return Err(fk_violation("trades_sell_account_id_fkey"));
            }
        }

        tables.last_trade_id += 1;
        let trade = Trade {
            id: tables.last_trade_id,
            buy_account_id: data.buy_account_id,
            sell_account_id: data.sell_account_id,
            usd_amount: data.usd_amount,
            btc_amount: data.btc_amount,
            currency: data.currency,
            trade_type: data.trade_type,
            created_at: Utc::now(),
        };
        tables.trades.insert(trade.id, trade.clone());

        Ok(trade)
    }

    async fn find_trade(&self, id: i64) -> StoreResult<Option<Trade>> {
        Ok(self.tables.read().await.trades.get(&id).cloned())
    }

    async fn list_trades_by_account(&self, account_id: i64) -> StoreResult<Vec<Trade>> {
        let tables = self.tables.read().await;
        Ok(tables
            .trades
            .values()
            .filter(|t| t.buy_account_id == account_id || t.sell_account_id == Some(account_id))
            .cloned()
            .collect())
    }
}
