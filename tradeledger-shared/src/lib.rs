//! # tradeledger shared library
//!
//! Models, storage and services for the trade ledger, used by the API
//! server and its tests.
//!
//! ## Module Organization
//!
//! - `models`: User, Account and Trade records and their SQL
//! - `stores`: storage traits with PostgreSQL and in-memory implementations
//! - `services`: CRUD services the HTTP layer calls into
//! - `auth`: password hashing and JWTs
//! - `db`: connection pool and migrations

pub mod auth;
pub mod db;
pub mod models;
pub mod services;
pub mod stores;

/// Current version of the shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
