use actix_web::web;

use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::extractors::rejections;
use crate::middleware::jwt_extract::JwtExtract;

pub mod assignments;
pub mod auth;
pub mod crew;
pub mod financial_reports;
pub mod health;
pub mod ships;
pub mod users;

/// Register every API scope.
///
/// Health and auth are public; every other scope sits behind `JwtExtract`.
/// `main.rs` and the integration tests share this wiring.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(rejections::query_config())
        .app_data(rejections::path_config());

    // Public: /api/health/**, /api/auth/**
    cfg.service(web::scope("/api/health").configure(health::configure_routes));
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));

    // Protected
    cfg.service(
        web::scope("/api/ships")
            .wrap(JwtExtract)
            .configure(ships::configure_routes),
    );
    cfg.service(
        web::scope("/api/users")
            .wrap(JwtExtract)
            .configure(users::configure_routes),
    );
    cfg.service(
        web::scope("/api/crew")
            .wrap(JwtExtract)
            .configure(crew::configure_routes),
    );
    cfg.service(
        web::scope("/api/financialreports")
            .wrap(JwtExtract)
            .configure(financial_reports::configure_routes),
    );
    cfg.service(
        web::scope("/api/usershipassignments")
            .wrap(JwtExtract)
            .configure(assignments::configure_routes),
    );
}

/// Map a service failure, reporting infra failures under `context`.
pub(crate) fn failed(context: &'static str) -> impl Fn(DomainError) -> AppError {
    move |err| AppError::from_domain(err, context)
}
