use actix_web::http::header;
use actix_web::{web, HttpResponse};
use tracing::info;

use super::failed;
use crate::error::AppError;
use crate::extractors::{CurrentClaims, ValidatedJson};
use crate::repos::ships::{Ship, ShipStatus};
use crate::services::ships::{ship_not_found, ShipDto};
use crate::state::app_state::AppState;

async fn list_ships(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let ships = app_state
        .services
        .ships
        .get_all()
        .await
        .map_err(failed("An error occurred while retrieving ships."))?;
    Ok(HttpResponse::Ok().json(ships))
}

async fn get_ship(
    code: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let code = code.into_inner();
    let ship = app_state
        .services
        .ships
        .get_by_code(&code)
        .await
        .map_err(failed("An error occurred while retrieving the ship."))?
        .ok_or_else(|| ship_not_found(&code))?;
    Ok(HttpResponse::Ok().json(ship))
}

async fn create_ship(
    body: ValidatedJson<ShipDto>,
    CurrentClaims(claims): CurrentClaims,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let ship = Ship::from_parts(&body.code, &body.name, &body.fiscal_year, &body.status)?;
    let created = app_state
        .services
        .ships
        .create(ship)
        .await
        .map_err(failed("An error occurred while creating the ship."))?;

    info!(actor = %claims.sub, ship_code = %created.code, "Ship create requested");
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/ships/{}", created.code)))
        .json(created))
}

async fn update_ship(
    code: web::Path<String>,
    body: ValidatedJson<ShipDto>,
    CurrentClaims(claims): CurrentClaims,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let code = code.into_inner();
    if body.code != code {
        return Err(AppError::invalid("Ship code mismatch."));
    }
    let ship = Ship::from_parts(&code, &body.name, &body.fiscal_year, &body.status)?;
    let updated = app_state
        .services
        .ships
        .update(ship)
        .await
        .map_err(failed("An error occurred while updating the ship."))?;

    info!(actor = %claims.sub, ship_code = %updated.code, "Ship update requested");
    Ok(HttpResponse::Ok().json(updated))
}

async fn delete_ship(
    code: web::Path<String>,
    CurrentClaims(claims): CurrentClaims,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let code = code.into_inner();
    let deleted = app_state
        .services
        .ships
        .delete(&code)
        .await
        .map_err(failed("An error occurred while deleting the ship."))?;
    if !deleted {
        return Err(ship_not_found(&code).into());
    }

    info!(actor = %claims.sub, ship_code = %code, "Ship delete requested");
    Ok(HttpResponse::NoContent().finish())
}

async fn ships_by_status(
    status: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let status: ShipStatus = status.parse()?;
    let ships = app_state
        .services
        .ships
        .get_by_status(status)
        .await
        .map_err(failed("An error occurred while retrieving ships by status."))?;
    Ok(HttpResponse::Ok().json(ships))
}

async fn ships_by_user(
    user_id: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let ships = app_state
        .services
        .ships
        .get_by_user(user_id.into_inner())
        .await
        .map_err(failed("An error occurred while retrieving ships by user."))?;
    Ok(HttpResponse::Ok().json(ships))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_ships))
            .route(web::post().to(create_ship)),
    )
    .service(web::resource("/status/{status}").route(web::get().to(ships_by_status)))
    .service(web::resource("/user/{user_id}").route(web::get().to(ships_by_user)))
    .service(
        web::resource("/{code}")
            .route(web::get().to(get_ship))
            .route(web::put().to(update_ship))
            .route(web::delete().to(delete_ship)),
    );
}
