use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::SubmitQuizRequest, response::GradeQuizResponse},
    services::GradingService,
    session::CurrentSession,
};

#[post("/api/quizzes/grade")]
pub async fn grade_quiz(
    state: web::Data<AppState>,
    session: CurrentSession,
    request: web::Json<SubmitQuizRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let (quiz, answers) = request.into_inner().into_parts();

    let report = GradingService::grade(&quiz, &answers);
    let progress = state
        .progress_service
        .record_quiz_result(&session.0, &quiz, &report)
        .await?;

    log::info!(
        "Graded {} quiz: {}/{} ({}%)",
        quiz.domain,
        report.correct_count,
        report.total_questions,
        report.score_percent
    );

    Ok(HttpResponse::Ok().json(GradeQuizResponse {
        report,
        progress,
        saved: !session.0.local_only,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        handlers,
        repositories::progress_repository::PROGRESS_FILE,
        services::llm_client::MockChatTransport,
        session::{context::LOCAL_ONLY_HEADER, SessionMiddleware},
        test_utils::{fixtures::sample_quiz, test_helpers::test_state},
    };
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    fn all_correct_answers() -> serde_json::Value {
        json!({
            "What is 1+1?": "2",
            "Select the supervised tasks": ["Classification", "Regression"],
            "Match the term to its definition.": {
                "Supervised": "Learning from labels",
                "Unsupervised": "Finding structure"
            }
        })
    }

    #[actix_web::test]
    async fn test_grade_quiz_scores_and_persists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(MockChatTransport::new(), dir.path())))
                .wrap(SessionMiddleware)
                .configure(handlers::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/quizzes/grade")
            .set_json(json!({ "quiz": sample_quiz(), "answers": all_correct_answers() }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["report"]["score_percent"], 100.0);
        assert_eq!(body["report"]["correct_count"], 3);
        assert_eq!(body["saved"], true);
        assert_eq!(body["progress"]["quiz_scores"]["AI Fundamentals"][0], 100.0);
        assert!(dir.path().join(PROGRESS_FILE).exists());
    }

    #[actix_web::test]
    async fn test_grade_quiz_local_only_does_not_write() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(MockChatTransport::new(), dir.path())))
                .wrap(SessionMiddleware)
                .configure(handlers::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/quizzes/grade")
            .insert_header((LOCAL_ONLY_HEADER, "true"))
            .set_json(json!({ "quiz": sample_quiz(), "answers": { "What is 1+1?": "1" } }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["report"]["score_percent"], 0.0);
        assert_eq!(body["saved"], false);
        assert!(!dir.path().join(PROGRESS_FILE).exists());
    }

    #[actix_web::test]
    async fn test_grade_quiz_with_unpicked_answers_scores_zero() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(MockChatTransport::new(), dir.path())))
                .wrap(SessionMiddleware)
                .configure(handlers::configure),
        )
        .await;

        let answers = json!({
            "What is 1+1?": null,
            "Select the supervised tasks": null,
            "Match the term to its definition.": {
                "Supervised": "Learning from labels",
                "Unsupervised": null
            }
        });
        let req = test::TestRequest::post()
            .uri("/api/quizzes/grade")
            .set_json(json!({ "quiz": sample_quiz(), "answers": answers }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["report"]["score_percent"], 0.0);
        assert_eq!(body["report"]["correct_count"], 0);
        assert_eq!(body["report"]["total_questions"], 3);
        assert!(body["report"]["results"][0]["user_answer"].is_null());
        assert_eq!(
            body["report"]["results"][2]["user_answer"],
            json!({ "Supervised": "Learning from labels" })
        );
    }

    #[actix_web::test]
    async fn test_grade_quiz_rejects_invalid_quiz() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(MockChatTransport::new(), dir.path())))
                .wrap(SessionMiddleware)
                .configure(handlers::configure),
        )
        .await;

        let mut quiz = sample_quiz();
        quiz.questions[0].options.clear();

        let req = test::TestRequest::post()
            .uri("/api/quizzes/grade")
            .set_json(json!({ "quiz": quiz, "answers": {} }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
