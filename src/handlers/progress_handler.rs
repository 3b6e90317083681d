use actix_web::{delete, get, post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, session::CurrentSession};

#[get("/api/progress")]
pub async fn get_progress(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let progress = state.progress_service.load().await?;
    Ok(HttpResponse::Ok().json(progress))
}

#[get("/api/progress/dashboard")]
pub async fn get_dashboard(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let dashboard = state.progress_service.dashboard().await?;
    Ok(HttpResponse::Ok().json(dashboard))
}

#[post("/api/progress/lessons/{objective_id}")]
pub async fn complete_lesson(
    state: web::Data<AppState>,
    session: CurrentSession,
    objective_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let progress = state
        .progress_service
        .mark_lesson_completed(&session.0, &objective_id)
        .await?;
    Ok(HttpResponse::Ok().json(progress))
}

#[post("/api/progress/labs/{objective_id}")]
pub async fn complete_lab(
    state: web::Data<AppState>,
    session: CurrentSession,
    objective_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let progress = state
        .progress_service
        .mark_lab_completed(&session.0, &objective_id)
        .await?;
    Ok(HttpResponse::Ok().json(progress))
}

#[delete("/api/progress")]
pub async fn reset_progress(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let progress = state.progress_service.reset().await?;
    Ok(HttpResponse::Ok().json(progress))
}
