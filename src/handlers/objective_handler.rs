use actix_web::{get, web, HttpResponse};

use crate::{
    errors::AppError,
    models::{
        domain::{
            objective::{all_objectives, objective_by_id, objectives_by_domain},
            Domain,
        },
        dto::{request::ObjectiveQuery, response::DomainDto},
    },
};

#[get("/api/domains")]
pub async fn list_domains() -> HttpResponse {
    let domains: Vec<DomainDto> = Domain::ALL.into_iter().map(DomainDto::from).collect();
    HttpResponse::Ok().json(domains)
}

#[get("/api/objectives")]
pub async fn list_objectives(query: web::Query<ObjectiveQuery>) -> Result<HttpResponse, AppError> {
    match query.domain.as_deref().filter(|d| !d.trim().is_empty()) {
        Some(name) => {
            let domain = Domain::from_name(name)
                .ok_or_else(|| AppError::ValidationError(format!("Unknown domain '{}'", name)))?;
            Ok(HttpResponse::Ok().json(objectives_by_domain(domain)))
        }
        None => Ok(HttpResponse::Ok().json(all_objectives())),
    }
}

#[get("/api/objectives/{id}")]
pub async fn get_objective(id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let objective = objective_by_id(&id)
        .ok_or_else(|| AppError::NotFound(format!("Objective '{}' not found", id)))?;
    Ok(HttpResponse::Ok().json(objective))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_objectives_filter_by_domain() {
        let app = test::init_service(App::new().service(list_objectives)).await;

        let req = test::TestRequest::get()
            .uri("/api/objectives?domain=Ethics%20%26%20Security")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let items = body.as_array().expect("array");
        assert_eq!(items.len(), 5);
        assert!(items.iter().all(|o| o["domain"] == "Ethics & Security"));
    }

    #[actix_web::test]
    async fn test_unknown_domain_is_bad_request() {
        let app = test::init_service(App::new().service(list_objectives)).await;

        let req = test::TestRequest::get()
            .uri("/api/objectives?domain=Astrology")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_get_objective_by_id() {
        let app = test::init_service(App::new().service(get_objective)).await;

        let found = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/objectives/2.4").to_request(),
        )
        .await;
        assert_eq!(found.status(), StatusCode::OK);

        let missing = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/objectives/9.9").to_request(),
        )
        .await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_list_domains_in_catalog_order() {
        let app = test::init_service(App::new().service(list_domains)).await;

        let req = test::TestRequest::get().uri("/api/domains").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body[0]["name"], "AI Fundamentals");
        assert_eq!(body[4]["name"], "Business Value & Future Impact");
    }
}
