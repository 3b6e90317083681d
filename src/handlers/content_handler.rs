use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    handlers::sse,
    models::dto::request::{
        ExpandLessonRequest, GenerateAssignmentRequest, GenerateLabRequest, GenerateLessonRequest,
        GenerateQuizRequest, SubmissionFeedbackRequest,
    },
    session::CurrentSession,
};

#[post("/api/lessons/outline")]
pub async fn generate_lesson_outline(
    state: web::Data<AppState>,
    session: CurrentSession,
    request: web::Json<GenerateLessonRequest>,
) -> Result<HttpResponse, AppError> {
    let events = state
        .content_service
        .lesson_outline(&session.0, &request)
        .await?;
    Ok(sse::generation_response(events))
}

#[post("/api/lessons/expand")]
pub async fn expand_lesson(
    state: web::Data<AppState>,
    session: CurrentSession,
    request: web::Json<ExpandLessonRequest>,
) -> Result<HttpResponse, AppError> {
    let ExpandLessonRequest { lesson, role } = request.into_inner();
    let lesson = state
        .content_service
        .expand_lesson(&session.0, lesson, &role, |_, _| {})
        .await?;
    Ok(HttpResponse::Ok().json(lesson))
}

#[post("/api/labs")]
pub async fn generate_lab(
    state: web::Data<AppState>,
    session: CurrentSession,
    request: web::Json<GenerateLabRequest>,
) -> Result<HttpResponse, AppError> {
    let events = state.content_service.lab(&session.0, &request).await?;
    Ok(sse::generation_response(events))
}

#[post("/api/quizzes")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    session: CurrentSession,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let events = state.content_service.quiz(&session.0, &request).await?;
    Ok(sse::generation_response(events))
}

#[post("/api/assignments")]
pub async fn generate_assignment(
    state: web::Data<AppState>,
    session: CurrentSession,
    request: web::Json<GenerateAssignmentRequest>,
) -> Result<HttpResponse, AppError> {
    let events = state
        .content_service
        .assignment(&session.0, &request)
        .await?;
    Ok(sse::generation_response(events))
}

#[post("/api/submissions/feedback")]
pub async fn submission_feedback(
    state: web::Data<AppState>,
    session: CurrentSession,
    request: web::Json<SubmissionFeedbackRequest>,
) -> Result<HttpResponse, AppError> {
    let fragments = state
        .content_service
        .submission_feedback(&session.0, &request)
        .await?;
    Ok(sse::text_response(fragments))
}
