use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        CategoryRepository, MongoCategoryRepository, MongoQuestionRepository, QuestionRepository,
    },
    services::{CategoryService, QuestionService, QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub category_service: Arc<CategoryService>,
    pub quiz_service: Arc<QuizService>,
    /// `None` when the repositories are not backed by MongoDB.
    pub db: Option<Database>,
}

impl AppState {
    pub async fn new(config: &Config) -> AppResult<Self> {
        let db = Database::connect(config).await?;

        let question_repository = Arc::new(MongoQuestionRepository::new(
            &db,
            &config.questions_collection,
        ));
        question_repository.ensure_indexes().await?;
        question_repository.sync_id_counter().await?;

        let category_repository = Arc::new(MongoCategoryRepository::new(
            &db,
            &config.categories_collection,
        ));
        category_repository.ensure_indexes().await?;

        let mut state = Self::from_repositories(
            question_repository,
            category_repository,
            config.questions_per_page,
        );

        if config.seed_categories {
            state.category_service.seed_defaults().await?;
        }

        state.db = Some(db);
        Ok(state)
    }

    pub fn from_repositories(
        question_repository: Arc<dyn QuestionRepository>,
        category_repository: Arc<dyn CategoryRepository>,
        questions_per_page: usize,
    ) -> Self {
        let question_service = Arc::new(QuestionService::new(
            question_repository.clone(),
            category_repository.clone(),
            questions_per_page,
        ));
        let category_service = Arc::new(CategoryService::new(category_repository));
        let quiz_service = Arc::new(QuizService::new(question_repository));

        Self {
            question_service,
            category_service,
            quiz_service,
            db: None,
        }
    }
}
