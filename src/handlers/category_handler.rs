use actix_web::{web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::request::PageQuery};

pub async fn get_categories(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let response = state.category_service.list_categories().await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn get_category_questions(
    state: web::Data<AppState>,
    category_id: web::Path<i64>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .question_service
        .list_by_category(category_id.into_inner(), query.page())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
