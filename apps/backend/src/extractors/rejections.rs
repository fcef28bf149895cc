//! Route-level extractor configs that report malformed query strings and
//! path segments as 400s in the usual error body.

use actix_web::error::{PathError, QueryPayloadError};
use actix_web::{web, HttpRequest};
use tracing::debug;

use crate::error::AppError;
use crate::logging::pii::Redacted;

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_rejected)
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_rejected)
}

fn query_rejected(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(
        path = %req.path(),
        error = %Redacted(&err.to_string()),
        "Query string rejected"
    );
    AppError::invalid(format!("Invalid query string: {err}")).into()
}

fn path_rejected(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = %req.path(), error = %err, "Path parameter rejected");
    AppError::invalid(format!("Invalid path parameter: {err}")).into()
}
