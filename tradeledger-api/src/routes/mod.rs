/// API route handlers, organized by resource
///
/// - `home`: greeting page
/// - `health`: health check
/// - `auth`: register, login, refresh and the current user
/// - `accounts`: account CRUD and per-user listing
/// - `trades`: trade recording and lookup

pub mod accounts;
pub mod auth;
pub mod health;
pub mod home;
pub mod trades;
