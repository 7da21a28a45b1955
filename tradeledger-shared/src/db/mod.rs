/// Database plumbing
///
/// - `pool`: PostgreSQL connection pool and health check
/// - `migrations`: embedded schema migrations
///
/// Queries live with their models in [`crate::models`].

pub mod migrations;
pub mod pool;
