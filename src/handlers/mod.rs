pub mod category_handler;
pub mod health_handler;
pub mod question_handler;
pub mod quiz_handler;

use actix_web::web;

use crate::errors::{
    json_error_handler, method_not_allowed, not_found, path_error_handler, query_error_handler,
};

/// Registers every route plus the extractor error handlers, so that each
/// failure answers with the common error body.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::resource("/categories")
                .route(web::get().to(category_handler::get_categories))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/categories/{category_id}/questions")
                .route(web::get().to(category_handler::get_category_questions))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/questions")
                .route(web::get().to(question_handler::get_questions))
                .route(web::post().to(question_handler::search_questions))
                .default_service(web::to(method_not_allowed)),
        )
        // Registered before `/questions/{id}` so "add" is never read as an id.
        .service(
            web::resource("/questions/add")
                .route(web::post().to(question_handler::create_question))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/questions/{question_id}")
                .route(web::delete().to(question_handler::delete_question))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/quizzes")
                .route(web::post().to(quiz_handler::play_quiz))
                .default_service(web::to(method_not_allowed)),
        )
        .route("/health", web::get().to(health_handler::health_check))
        .route("/health/live", web::get().to(health_handler::health_check_live))
        .route("/health/ready", web::get().to(health_handler::health_check_ready))
        .default_service(web::to(not_found));
}
