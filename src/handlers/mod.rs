pub mod content_handler;
pub mod health_handler;
pub mod objective_handler;
pub mod progress_handler;
pub mod quiz_handler;
pub mod settings_handler;
pub mod sse;

use actix_web::web;

pub use content_handler::{
    expand_lesson, generate_assignment, generate_lab, generate_lesson_outline, generate_quiz,
    submission_feedback,
};
pub use health_handler::health_check;
pub use objective_handler::{get_objective, list_domains, list_objectives};
pub use progress_handler::{
    complete_lab, complete_lesson, get_dashboard, get_progress, reset_progress,
};
pub use quiz_handler::grade_quiz;
pub use settings_handler::{get_settings, update_settings};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(list_domains)
        .service(list_objectives)
        .service(get_objective)
        .service(generate_lesson_outline)
        .service(expand_lesson)
        .service(generate_lab)
        .service(grade_quiz)
        .service(generate_quiz)
        .service(generate_assignment)
        .service(submission_feedback)
        .service(get_dashboard)
        .service(get_progress)
        .service(complete_lesson)
        .service(complete_lab)
        .service(reset_progress)
        .service(get_settings)
        .service(update_settings);
}
