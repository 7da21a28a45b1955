/// Database models for the ledger
///
/// Each model owns its SQL: `create`, `find_by_id` and friends take a
/// `&PgPool` and run exactly one statement.
///
/// # Models
///
/// - `user`: registered users
/// - `account`: USD/BTC balance records owned by a user
/// - `trade`: trades between a buy account and an optional sell account

pub mod account;
pub mod trade;
pub mod user;

pub use account::{Account, AccountType, CreateAccount, UpdateAccount};
pub use trade::{CreateTrade, CurrencyType, Trade, TradeType};
pub use user::{CreateUser, User};
