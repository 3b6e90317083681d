use actix_web::{get, put, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::domain::AppSettings};

#[get("/api/settings")]
pub async fn get_settings(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let settings = state.settings_service.load().await?;
    Ok(HttpResponse::Ok().json(settings))
}

#[put("/api/settings")]
pub async fn update_settings(
    state: web::Data<AppState>,
    request: web::Json<AppSettings>,
) -> Result<HttpResponse, AppError> {
    let settings = state.settings_service.save(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(settings))
}
