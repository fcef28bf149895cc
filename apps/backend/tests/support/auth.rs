//! Token helpers for tests

use std::time::{Duration, SystemTime};

use ships_backend::auth::jwt::mint_access_token;
use ships_backend::state::security_config::SecurityConfig;
use ships_backend::{Role, ACCESS_TOKEN_TTL};

/// Bearer token for `sub`, with the role login would give it
pub fn mint_test_token(sub: &str, sec: &SecurityConfig) -> String {
    mint_access_token(
        sub,
        Role::for_identifier(sub),
        ACCESS_TOKEN_TTL,
        SystemTime::now(),
        sec,
    )
    .expect("should mint token successfully")
    .token
}

/// Full Authorization header value including the "Bearer " prefix
pub fn bearer_header(sub: &str, sec: &SecurityConfig) -> String {
    format!("Bearer {}", mint_test_token(sub, sec))
}

/// A token that expired an hour ago
pub fn mint_expired_token(sub: &str, sec: &SecurityConfig) -> String {
    let issued = SystemTime::now() - Duration::from_secs(2 * 60 * 60);
    mint_access_token(
        sub,
        Role::for_identifier(sub),
        Duration::from_secs(60 * 60),
        issued,
        sec,
    )
    .expect("should mint expired token successfully")
    .token
}
