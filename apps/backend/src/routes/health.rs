use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};
use serde::Serialize;
use time::OffsetDateTime;
use tracing::warn;

use crate::error::AppError;
use crate::state::app_state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub version: &'static str,
    pub environment: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedHealthStatus {
    #[serde(flatten)]
    pub summary: HealthStatus,
    pub dependencies: BTreeMap<&'static str, &'static str>,
    pub uptime_seconds: u64,
}

fn summary(app_state: &AppState, status: &'static str) -> HealthStatus {
    HealthStatus {
        status,
        timestamp: OffsetDateTime::now_utc(),
        version: VERSION,
        environment: app_state.config.environment.to_string(),
    }
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(summary(&app_state, "Healthy")))
}

/// Like `/api/health`, plus a live database ping. An unreachable database
/// reports `Degraded` but still answers 200.
async fn health_detailed(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let database = match app_state.db() {
        Some(db) => match db.ping().await {
            Ok(()) => "Connected",
            Err(e) => {
                warn!(error = %e, "Database ping failed");
                "Unavailable"
            }
        },
        None => "Not configured",
    };
    let status = if database == "Unavailable" {
        "Degraded"
    } else {
        "Healthy"
    };

    let dependencies = BTreeMap::from([
        ("Database", database),
        ("JWT Service", "Available"),
        ("Logging", "Active"),
    ]);

    Ok(HttpResponse::Ok().json(DetailedHealthStatus {
        summary: summary(&app_state, status),
        dependencies,
        uptime_seconds: app_state.started_at.elapsed().as_secs(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(health)))
        .service(web::resource("/detailed").route(web::get().to(health_detailed)));
}
