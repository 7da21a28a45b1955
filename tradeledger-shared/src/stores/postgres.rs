/// PostgreSQL-backed store
///
/// Thin adapter from the store traits to the per-model queries. Constraint
/// violations surface as [`StoreError::UniqueViolation`] and
/// [`StoreError::ForeignKeyViolation`].

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::{AccountStore, StoreError, StoreResult, TradeStore, UserStore};
use crate::models::{Account, CreateAccount, CreateTrade, CreateUser, Trade, User};

/// Store backed by a PostgreSQL connection pool
///
/// Cloning is cheap; clones share the pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn insert_user(&self, data: CreateUser) -> StoreResult<User> {
        let user = User::create(&self.pool, data).await?;
        debug!(user_id = user.id, "Inserted user");
        Ok(user)
    }

    async fn find_user(&self, id: i64) -> StoreResult<Option<User>> {
        User::find_by_id(&self.pool, id).await.map_err(StoreError::from)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        User::find_by_email(&self.pool, email).await.map_err(StoreError::from)
    }
}

#[async_trait]
impl AccountStore for PgStore {
    async fn insert_account(&self, data: CreateAccount) -> StoreResult<Account> {
        let account = Account::create(&self.pool, data).await?;
        debug!(account_id = account.id, user_id = account.user_id, "Inserted account");
        Ok(account)
    }

    async fn find_account(&self, id: i64) -> StoreResult<Option<Account>> {
        Account::find_by_id(&self.pool, id).await.map_err(StoreError::from)
    }

    async fn save_account(&self, account: &Account) -> StoreResult<Option<Account>> {
        Account::save(&self.pool, account).await.map_err(StoreError::from)
    }

    async fn delete_account(&self, id: i64) -> StoreResult<bool> {
        Account::delete(&self.pool, id).await.map_err(StoreError::from)
    }

    async fn list_accounts_by_user(&self, user_id: i64) -> StoreResult<Vec<Account>> {
        Account::list_by_user(&self.pool, user_id).await.map_err(StoreError::from)
    }
}

#[async_trait]
impl TradeStore for PgStore {
    async fn insert_trade(&self, data: CreateTrade) -> StoreResult<Trade> {
        let trade = Trade::create(&self.pool, data).await?;
        debug!(trade_id = trade.id, buy_account_id = trade.buy_account_id, "Inserted trade");
        Ok(trade)
    }

    async fn find_trade(&self, id: i64) -> StoreResult<Option<Trade>> {
        Trade::find_by_id(&self.pool, id).await.map_err(StoreError::from)
    }

    async fn list_trades_by_account(&self, account_id: i64) -> StoreResult<Vec<Trade>> {
        Trade::list_by_account(&self.pool, account_id)
            .await
            .map_err(StoreError::from)
    }
}
