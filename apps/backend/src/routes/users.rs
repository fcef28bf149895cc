use actix_web::http::header;
use actix_web::{web, HttpResponse};
use tracing::info;

use super::failed;
use crate::error::AppError;
use crate::extractors::{CurrentClaims, ValidatedJson};
use crate::repos::users::NewUser;
use crate::services::users::{user_not_found, UserDto};
use crate::state::app_state::AppState;

async fn list_users(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = app_state
        .services
        .users
        .get_all()
        .await
        .map_err(failed("An error occurred while retrieving users."))?;
    Ok(HttpResponse::Ok().json(users))
}

async fn get_user(
    user_id: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = user_id.into_inner();
    let user = app_state
        .services
        .users
        .get_by_id(user_id)
        .await
        .map_err(failed("An error occurred while retrieving the user."))?
        .ok_or_else(|| user_not_found(user_id))?;
    Ok(HttpResponse::Ok().json(user))
}

async fn create_user(
    body: ValidatedJson<UserDto>,
    CurrentClaims(claims): CurrentClaims,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user = NewUser::new(&body.name, &body.role)?;
    let created = app_state
        .services
        .users
        .create(user)
        .await
        .map_err(failed("An error occurred while creating the user."))?;

    info!(actor = %claims.sub, user_id = created.user_id, "User create requested");
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/users/{}", created.user_id)))
        .json(created))
}

async fn update_user(
    user_id: web::Path<i32>,
    body: ValidatedJson<UserDto>,
    CurrentClaims(claims): CurrentClaims,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = user_id.into_inner();
    if body.user_id != user_id {
        return Err(AppError::invalid("User ID mismatch."));
    }
    let user = NewUser::new(&body.name, &body.role)?.with_id(user_id);
    let updated = app_state
        .services
        .users
        .update(user)
        .await
        .map_err(failed("An error occurred while updating the user."))?;

    info!(actor = %claims.sub, user_id, "User update requested");
    Ok(HttpResponse::Ok().json(updated))
}

async fn delete_user(
    user_id: web::Path<i32>,
    CurrentClaims(claims): CurrentClaims,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = user_id.into_inner();
    let deleted = app_state
        .services
        .users
        .delete(user_id)
        .await
        .map_err(failed("An error occurred while deleting the user."))?;
    if !deleted {
        return Err(user_not_found(user_id).into());
    }

    info!(actor = %claims.sub, user_id, "User delete requested");
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_users))
            .route(web::post().to(create_user)),
    )
    .service(
        web::resource("/{user_id}")
            .route(web::get().to(get_user))
            .route(web::put().to(update_user))
            .route(web::delete().to(delete_user)),
    );
}
