//! Claims carried by backend-issued access tokens.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// Inserted into request extensions by `JwtExtract`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// Login identifier the token was issued to
    pub sub: String,
    pub role: Role,
    pub iss: String,
    pub aud: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
