use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{NewQuestion, Question},
        dto::{
            request::CreateQuestionRequest,
            response::{
                CategoryQuestionsResponse, DeleteQuestionResponse, QuestionListResponse,
                SearchResponse, SuccessResponse,
            },
        },
    },
    repositories::{CategoryRepository, QuestionRepository},
    services::pagination::paginate,
};

pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
    categories: Arc<dyn CategoryRepository>,
    page_size: usize,
}

impl QuestionService {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
        page_size: usize,
    ) -> Self {
        Self {
            questions,
            categories,
            page_size,
        }
    }

    /// Slices `page` out of `all`; an empty page is a 404.
    fn page_of(&self, all: &[Question], page: i64) -> AppResult<(Vec<Question>, i64)> {
        let page = page.max(1);
        let current = paginate(page, self.page_size, all);
        if current.is_empty() {
            return Err(AppError::NotFound(format!(
                "No questions found on page {}",
                page
            )));
        }

        Ok((current.to_vec(), page))
    }

    pub async fn list_questions(&self, page: i64) -> AppResult<QuestionListResponse> {
        let all = self.questions.find_all().await?;
        let (questions, page) = self.page_of(&all, page)?;
        let categories = self.categories.find_all().await?;

        Ok(QuestionListResponse {
            success: true,
            questions,
            categories,
            total_questions: all.len(),
            current_category: String::new(),
            page,
        })
    }

    pub async fn search_questions(&self, term: &str, page: i64) -> AppResult<SearchResponse> {
        let matches = self.questions.search(term.trim()).await?;
        let (questions, page) = self.page_of(&matches, page)?;

        Ok(SearchResponse {
            success: true,
            questions,
            total_questions: matches.len(),
            category: None,
            page,
        })
    }

    pub async fn list_by_category(
        &self,
        category_id: i64,
        page: i64,
    ) -> AppResult<CategoryQuestionsResponse> {
        let category = self
            .categories
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Category with id {} not found", category_id))
            })?;

        let matches = self.questions.find_by_category(category_id).await?;
        let (questions, page) = self.page_of(&matches, page)?;

        Ok(CategoryQuestionsResponse {
            success: true,
            questions,
            total_questions: matches.len(),
            current_category: category.kind,
            page,
        })
    }

    pub async fn create_question(
        &self,
        request: CreateQuestionRequest,
    ) -> AppResult<SuccessResponse> {
        let request = request.normalized();
        request.validate()?;

        if self.categories.find_by_id(request.category).await?.is_none() {
            return Err(AppError::UnprocessableEntity(format!(
                "Category with id {} does not exist",
                request.category
            )));
        }

        let created = self
            .questions
            .create(NewQuestion::from_request(request))
            .await?;
        log::info!("Created question {} in category {}", created.id, created.category);

        Ok(SuccessResponse::ok())
    }

    pub async fn delete_question(&self, id: i64) -> AppResult<DeleteQuestionResponse> {
        self.questions.delete(id).await?;
        log::info!("Deleted question {}", id);
        Ok(DeleteQuestionResponse::deleted(id))
    }
}
