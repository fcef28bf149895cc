use actix_web::{web, HttpResponse};
use serde::Deserialize;

use super::failed;
use crate::error::AppError;
use crate::repos::crew::{
    CrewListRequest, SortDirection, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, DEFAULT_SORT_COLUMN,
};
use crate::state::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CrewListQuery {
    pub page_number: Option<i32>,
    pub page_size: Option<i32>,
    pub sort_column: Option<String>,
    pub sort_direction: Option<String>,
    pub search_term: Option<String>,
}

impl CrewListQuery {
    fn into_request(self, ship_code: &str) -> Result<CrewListRequest, AppError> {
        let request = CrewListRequest::new(
            ship_code,
            self.page_number.unwrap_or(DEFAULT_PAGE_NUMBER),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            self.sort_column.as_deref().unwrap_or(DEFAULT_SORT_COLUMN),
            self.sort_direction
                .as_deref()
                .unwrap_or(SortDirection::default().as_str()),
            self.search_term.as_deref(),
        )?;
        Ok(request)
    }
}

async fn crew_list(
    ship_code: web::Path<String>,
    query: web::Query<CrewListQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let request = query.into_inner().into_request(&ship_code)?;
    let crew = app_state
        .services
        .crew
        .get_crew_list(&request)
        .await
        .map_err(failed("An error occurred while retrieving crew list."))?;
    Ok(HttpResponse::Ok().json(crew))
}

async fn crew_member_history(
    crew_member_id: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if crew_member_id.trim().is_empty() {
        return Err(AppError::invalid("Crew member ID is required."));
    }
    let history = app_state
        .services
        .crew
        .get_crew_member_history(&crew_member_id)
        .await
        .map_err(failed("An error occurred while retrieving crew member history."))?;
    Ok(HttpResponse::Ok().json(history))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/ship/{ship_code}").route(web::get().to(crew_list)))
        .service(
            web::resource("/member/{crew_member_id}").route(web::get().to(crew_member_history)),
        );
}
