use std::sync::Arc;

use rand::Rng;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::CategorySelector,
        dto::{request::QuizRequest, response::QuizResponse},
    },
    repositories::QuestionRepository,
    services::quiz_selector::{select_quiz_question, QuizPick},
};

pub struct QuizService {
    repository: Arc<dyn QuestionRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    pub async fn next_question<R>(&self, request: QuizRequest, rng: &mut R) -> AppResult<QuizResponse>
    where
        R: Rng + ?Sized,
    {
        let selector = request.selector().ok_or_else(|| {
            AppError::UnprocessableEntity(
                "quiz_category.id must be 0 (all) or a category id".to_string(),
            )
        })?;

        let pool = match selector {
            CategorySelector::All => self.repository.find_all().await?,
            CategorySelector::Category(id) => self.repository.find_by_category(id).await?,
        };

        let question = match select_quiz_question(&pool, &request.previous_questions, rng) {
            QuizPick::Next(question) => Some(question.clone()),
            QuizPick::Exhausted => {
                log::debug!(
                    "Quiz exhausted for {:?} after {} questions",
                    selector,
                    request.previous_questions.len()
                );
                None
            }
            QuizPick::NoCandidates => {
                log::info!("No quiz questions available for {:?}", selector);
                None
            }
        };

        Ok(QuizResponse {
            success: true,
            question,
        })
    }
}
