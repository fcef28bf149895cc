//! Credential check and token issuance for `POST /api/auth/login`.

use std::time::{Duration, SystemTime};

use time::OffsetDateTime;
use tracing::{info, warn};

use super::credentials::CredentialStore;
use super::jwt::mint_access_token;
use super::role::Role;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Lifetime of tokens issued at login.
pub const ACCESS_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

pub const CREDENTIALS_REQUIRED: &str = "Username and password are required.";
pub const INVALID_CREDENTIALS: &str = "Invalid username or password.";

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub subject: String,
    pub role: Role,
    pub expires_at: OffsetDateTime,
}

/// Check `identifier`/`secret` against `store` and mint a token on success.
///
/// Blank input is a validation error and never reaches the store. Unknown
/// identifiers and wrong secrets share one unauthorized message.
pub async fn authenticate(
    store: &dyn CredentialStore,
    identifier: &str,
    secret: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<LoginOutcome, AppError> {
    if identifier.trim().is_empty() || secret.trim().is_empty() {
        return Err(AppError::invalid(CREDENTIALS_REQUIRED));
    }

    let record = match store.lookup(identifier).await {
        Some(record) if record.matches_secret(secret) => record,
        _ => {
            warn!(username = %identifier, "Login failed");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }
    };

    let minted = mint_access_token(identifier, record.role, ACCESS_TOKEN_TTL, now, security)?;
    let expires_at = OffsetDateTime::from_unix_timestamp(minted.claims.exp)
        .map_err(|e| AppError::internal(format!("Token expiry out of range: {e}")))?;

    info!(username = %identifier, role = %record.role, "Login succeeded");

    Ok(LoginOutcome {
        token: minted.token,
        subject: identifier.to_string(),
        role: record.role,
        expires_at,
    })
}
