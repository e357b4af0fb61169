use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::Category, dto::response::CategoriesResponse},
    repositories::CategoryRepository,
};

pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_categories(&self) -> AppResult<CategoriesResponse> {
        let categories = self.repository.find_all().await?;
        if categories.is_empty() {
            return Err(AppError::NotFound("No categories found".to_string()));
        }

        Ok(CategoriesResponse::from(categories))
    }

    pub async fn seed_defaults(&self) -> AppResult<usize> {
        self.repository.seed(Category::defaults()).await
    }
}
