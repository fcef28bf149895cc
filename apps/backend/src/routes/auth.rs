use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::auth::jwt::is_token_valid;
use crate::auth::login::authenticate;
use crate::auth::role::Role;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::state::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub role: Role,
    #[serde(with = "time::serde::rfc3339")]
    pub expires: OffsetDateTime,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ValidateTokenRequest {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateTokenResponse {
    pub valid: bool,
    pub message: &'static str,
}

async fn login(
    req: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let outcome = authenticate(
        app_state.credentials.as_ref(),
        &req.username,
        &req.password,
        SystemTime::now(),
        &app_state.security,
    )
    .await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        token: outcome.token,
        username: outcome.subject,
        role: outcome.role,
        expires: outcome.expires_at,
    }))
}

/// 200 with `valid: true`, or 401 with `valid: false`; only a blank token is a 400.
async fn validate(
    req: ValidatedJson<ValidateTokenRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if req.token.trim().is_empty() {
        return Err(AppError::invalid("Token is required."));
    }

    if is_token_valid(&req.token, SystemTime::now(), &app_state.security) {
        Ok(HttpResponse::Ok().json(ValidateTokenResponse {
            valid: true,
            message: "Token is valid.",
        }))
    } else {
        Ok(HttpResponse::Unauthorized().json(ValidateTokenResponse {
            valid: false,
            message: "Token is invalid.",
        }))
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::post().to(login)))
        .service(web::resource("/validate").route(web::post().to(validate)));
}
