/// CRUD services over the stores
///
/// Each service holds its stores behind `Arc<dyn ...>` so the HTTP layer can
/// run on [`crate::stores::PgStore`] while tests swap in
/// [`crate::stores::MemoryStore`]. Services carry no business rules: a
/// missing row is `Ok(None)` (or `Ok(false)` for deletes), never an error.
///
/// - [`UserService`]: registration and password authentication
/// - [`AccountService`]: account create/read/update/delete
/// - [`TradeService`]: trade recording and lookup

use crate::{auth::password::PasswordError, stores::StoreError};

pub mod account_service;
pub mod trade_service;
pub mod user_service;

pub use account_service::AccountService;
pub use trade_service::TradeService;
pub use user_service::UserService;

/// Service result type alias
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors a service call can fail with
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Password(#[from] PasswordError),
}
