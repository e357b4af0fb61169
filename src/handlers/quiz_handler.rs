use actix_web::{web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::request::QuizRequest};

pub async fn play_quiz(
    state: web::Data<AppState>,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let mut rng = rand::thread_rng();
    let response = state
        .quiz_service
        .next_question(request.into_inner(), &mut rng)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
