use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::auth::claims::Claims;
use crate::error::AppError;
use crate::middleware::jwt_extract::MISSING_BEARER;

/// Claims placed in request extensions by `JwtExtract`.
///
/// Only meaningful inside a scope wrapped with `JwtExtract`; elsewhere it
/// always rejects with 401.
#[derive(Debug, Clone)]
pub struct CurrentClaims(pub Claims);

impl FromRequest for CurrentClaims {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let claims = req.extensions().get::<Claims>().cloned();
        ready(
            claims
                .map(CurrentClaims)
                .ok_or_else(|| AppError::unauthorized(MISSING_BEARER)),
        )
    }
}
