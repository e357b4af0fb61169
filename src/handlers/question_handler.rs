use actix_web::{web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateQuestionRequest, PageQuery, SearchRequest},
};

pub async fn get_questions(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let response = state.question_service.list_questions(query.page()).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn create_question(
    state: web::Data<AppState>,
    request: web::Json<CreateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .question_service
        .create_question(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn search_questions(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
    request: web::Json<SearchRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .question_service
        .search_questions(&request.search_term, query.page())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn delete_question(
    state: web::Data<AppState>,
    question_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .question_service
        .delete_question(question_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
