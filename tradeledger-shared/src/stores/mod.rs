/// Storage seam between the services and the database
///
/// The services only ever talk to these traits. Each method is a single
/// statement against the backing store; none of them span a transaction.
///
/// # Implementations
///
/// - [`PgStore`]: PostgreSQL through the model queries in [`crate::models`]
/// - [`MemoryStore`]: in-process maps, for tests and database-less runs
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tradeledger_shared::services::AccountService;
/// use tradeledger_shared::stores::MemoryStore;
///
/// let store = Arc::new(MemoryStore::new());
/// let accounts = AccountService::new(store);
/// ```

use async_trait::async_trait;

use crate::models::{Account, CreateAccount, CreateTrade, CreateUser, Trade, User};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A unique constraint rejected the write (e.g. duplicate email)
    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    /// A foreign key pointed at a row that does not exist
    #[error("Foreign key constraint violated: {constraint}")]
    ForeignKeyViolation { constraint: String },

    /// Any other database failure
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err.constraint().unwrap_or("unknown").to_string();

            if db_err.is_unique_violation() {
                return StoreError::UniqueViolation { constraint };
            }
            if db_err.is_foreign_key_violation() {
                return StoreError::ForeignKeyViolation { constraint };
            }
        }

        StoreError::Database(err)
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert_user(&self, data: CreateUser) -> StoreResult<User>;

    async fn find_user(&self, id: i64) -> StoreResult<Option<User>>;

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn insert_account(&self, data: CreateAccount) -> StoreResult<Account>;

    async fn find_account(&self, id: i64) -> StoreResult<Option<Account>>;

    /// Overwrites balances and type, bumping `updated_at`
    ///
    /// Returns `None` if the account vanished since it was read.
    async fn save_account(&self, account: &Account) -> StoreResult<Option<Account>>;

    /// Returns whether a row was removed
    async fn delete_account(&self, id: i64) -> StoreResult<bool>;

    async fn list_accounts_by_user(&self, user_id: i64) -> StoreResult<Vec<Account>>;
}

#[async_trait]
pub trait TradeStore: Send + Sync {
    async fn insert_trade(&self, data: CreateTrade) -> StoreResult<Trade>;

    async fn find_trade(&self, id: i64) -> StoreResult<Option<Trade>>;

    /// Trades where the account is the buy or the sell side, oldest first
    async fn list_trades_by_account(&self, account_id: i64) -> StoreResult<Vec<Trade>>;
}
