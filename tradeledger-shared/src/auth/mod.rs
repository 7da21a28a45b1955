/// Authentication primitives
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: HS256 access/refresh token issuance and validation

pub mod password;
pub mod jwt;
