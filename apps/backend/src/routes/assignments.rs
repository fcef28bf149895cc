use actix_web::{web, HttpResponse};
use serde::Deserialize;

use super::failed;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::state::app_state::AppState;

/// Body of both `/assign` and `/unassign`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignmentBody {
    pub user_id: i32,
    pub ship_code: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignmentFilter {
    pub user_id: Option<i32>,
    pub ship_code: Option<String>,
}

async fn assign(
    body: ValidatedJson<AssignmentBody>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let assignment = app_state
        .services
        .assignments
        .assign(body.user_id, &body.ship_code)
        .await
        .map_err(failed("An error occurred while assigning ship to user."))?;
    Ok(HttpResponse::Ok().json(assignment))
}

async fn unassign(
    body: ValidatedJson<AssignmentBody>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let removed = app_state
        .services
        .assignments
        .unassign(body.user_id, &body.ship_code)
        .await
        .map_err(failed("An error occurred while unassigning ship from user."))?;
    if !removed {
        return Err(AppError::not_found("Ship assignment not found."));
    }
    Ok(HttpResponse::NoContent().finish())
}

async fn list_assignments(
    filter: web::Query<AssignmentFilter>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let assignments = app_state
        .services
        .assignments
        .list(filter.user_id, filter.ship_code.as_deref())
        .await
        .map_err(failed("An error occurred while retrieving user ship assignments."))?;
    Ok(HttpResponse::Ok().json(assignments))
}

async fn assignments_for_user(
    user_id: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = user_id.into_inner();
    if user_id <= 0 {
        return Err(AppError::invalid("Valid UserId is required."));
    }
    let assignments = app_state
        .services
        .assignments
        .list(Some(user_id), None)
        .await
        .map_err(failed("An error occurred while retrieving assignments for user."))?;
    Ok(HttpResponse::Ok().json(assignments))
}

async fn assignments_for_ship(
    ship_code: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if ship_code.trim().is_empty() {
        return Err(AppError::invalid("ShipCode is required."));
    }
    let assignments = app_state
        .services
        .assignments
        .list(None, Some(ship_code.as_str()))
        .await
        .map_err(failed("An error occurred while retrieving assignments for ship."))?;
    Ok(HttpResponse::Ok().json(assignments))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(list_assignments)))
        .service(web::resource("/assign").route(web::post().to(assign)))
        .service(web::resource("/unassign").route(web::post().to(unassign)))
        .service(web::resource("/user/{user_id}").route(web::get().to(assignments_for_user)))
        .service(web::resource("/ship/{ship_code}").route(web::get().to(assignments_for_ship)));
}
