use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use super::claims::Claims;
use super::role::Role;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

pub const INVALID_TOKEN: &str = "Invalid or expired token.";

/// A signed token together with the claims it carries.
#[derive(Debug, Clone)]
pub struct MintedToken {
    pub token: String,
    pub claims: Claims,
}

fn unix_seconds(now: SystemTime) -> Result<i64, AppError> {
    let secs = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("System clock is before the Unix epoch"))?
        .as_secs();
    i64::try_from(secs).map_err(|_| AppError::internal("System clock out of range"))
}

/// Mint an HS256 access token valid for `ttl` from `now`.
///
/// Output is deterministic for identical inputs.
pub fn mint_access_token(
    sub: &str,
    role: Role,
    ttl: Duration,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<MintedToken, AppError> {
    let iat = unix_seconds(now)?;
    let ttl_secs = i64::try_from(ttl.as_secs())
        .map_err(|_| AppError::internal("Token lifetime out of range"))?;

    let claims = Claims {
        sub: sub.to_string(),
        role,
        iss: security.issuer.clone(),
        aud: security.audience.clone(),
        iat,
        exp: iat.saturating_add(ttl_secs),
    };

    let token = encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))?;

    Ok(MintedToken { token, claims })
}

/// Verify signature, issuer, audience, then expiry, and return the claims.
///
/// Expiry is checked here against `now` with zero leeway: a token is
/// rejected from its `exp` second onwards.
pub fn decode_access_token(
    token: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<Claims, AppError> {
    let mut validation = Validation::new(security.algorithm);
    validation.validate_exp = false;
    validation.leeway = 0;
    validation.set_issuer(&[security.issuer.as_str()]);
    validation.set_audience(&[security.audience.as_str()]);
    validation.set_required_spec_claims(&["sub", "iss", "aud", "exp"]);

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        debug!(reason = ?e.kind(), "Token rejected");
        AppError::unauthorized(INVALID_TOKEN)
    })?;

    if unix_seconds(now)? >= claims.exp {
        debug!(sub = %claims.sub, exp = claims.exp, "Token expired");
        return Err(AppError::unauthorized(INVALID_TOKEN));
    }

    Ok(claims)
}

/// Boolean form of [`decode_access_token`]; never fails.
pub fn is_token_valid(token: &str, now: SystemTime, security: &SecurityConfig) -> bool {
    !token.is_empty() && decode_access_token(token, now, security).is_ok()
}
