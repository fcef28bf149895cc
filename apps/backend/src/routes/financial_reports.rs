use actix_web::{web, HttpResponse};
use serde::Deserialize;
use time::macros::format_description;
use time::Date;

use super::failed;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::financial_reports::FinancialReportRequest;
use crate::state::app_state::AppState;

const ACCOUNT_PERIOD_REQUIRED: &str = "AccountPeriod is required.";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountPeriodQuery {
    pub account_period: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialReportBody {
    pub ship_code: Option<String>,
    pub account_period: Option<String>,
}

/// Accepts `YYYY-MM-DD`, optionally followed by a time part
/// (`2024-01-31T00:00:00Z`); only the date is kept.
///
/// `0001-01-01` is an unset date, not a period.
pub fn parse_account_period(raw: Option<&str>) -> Result<Date, AppError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    let date_part = match raw.get(..10) {
        Some(date) if raw.len() == 10 || raw[10..].starts_with(['T', 't', ' ']) => date,
        _ => return Err(AppError::invalid(ACCOUNT_PERIOD_REQUIRED)),
    };

    let date = Date::parse(date_part, format_description!("[year]-[month]-[day]"))
        .map_err(|_| AppError::invalid(ACCOUNT_PERIOD_REQUIRED))?;
    if date.year() == 1 && date.ordinal() == 1 {
        return Err(AppError::invalid(ACCOUNT_PERIOD_REQUIRED));
    }
    Ok(date)
}

async fn report_by_query(
    ship_code: web::Path<String>,
    query: web::Query<AccountPeriodQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if ship_code.trim().is_empty() {
        return Err(AppError::invalid("ShipCode cannot be empty."));
    }
    let account_period = parse_account_period(query.account_period.as_deref())?;
    let request = FinancialReportRequest::new(&ship_code, account_period)?;

    let report = app_state
        .services
        .financial_reports
        .get_financial_report(&request)
        .await
        .map_err(failed("An error occurred while retrieving the financial report."))?;
    Ok(HttpResponse::Ok().json(report))
}

async fn report_by_body(
    ship_code: web::Path<String>,
    body: ValidatedJson<FinancialReportBody>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if ship_code.trim().is_empty() {
        return Err(AppError::invalid("ShipCode cannot be empty."));
    }
    let body_code = body.ship_code.as_deref().unwrap_or_default();
    if body_code.trim().is_empty() {
        return Err(AppError::invalid("ShipCode in request body is required."));
    }
    if body_code != ship_code.as_str() {
        return Err(AppError::invalid(
            "ShipCode in URL must match ShipCode in request body.",
        ));
    }
    let account_period = parse_account_period(body.account_period.as_deref())?;
    let request = FinancialReportRequest::new(body_code, account_period)?;

    let report = app_state
        .services
        .financial_reports
        .get_financial_report(&request)
        .await
        .map_err(failed("An error occurred while retrieving the financial report."))?;
    Ok(HttpResponse::Ok().json(report))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/ship/{ship_code}")
            .route(web::get().to(report_by_query))
            .route(web::post().to(report_by_body)),
    );
}
