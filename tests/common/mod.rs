#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use trivia_server::{
    errors::{AppError, AppResult},
    models::domain::{Category, NewQuestion, Question},
    repositories::{CategoryRepository, QuestionRepository},
};

#[derive(Default)]
struct QuestionTable {
    rows: Vec<Question>,
    last_id: i64,
}

/// Behaves like the MongoDB repository: ids ascend, text is unique.
pub struct InMemoryQuestionRepository {
    table: Arc<RwLock<QuestionTable>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(QuestionTable::default())),
        }
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_all(&self) -> AppResult<Vec<Question>> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn find_by_category(&self, category_id: i64) -> AppResult<Vec<Question>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect())
    }

    async fn search(&self, term: &str) -> AppResult<Vec<Question>> {
        let term = term.to_lowercase();
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .filter(|q| q.question.to_lowercase().contains(&term))
            .cloned()
            .collect())
    }

    async fn create(&self, question: NewQuestion) -> AppResult<Question> {
        let mut table = self.table.write().await;
        if table.rows.iter().any(|q| q.question == question.question) {
            return Err(AppError::UnprocessableEntity(format!(
                "A question with the text '{}' already exists",
                question.question
            )));
        }

        table.last_id += 1;
        let question = question.with_id(table.last_id);
        table.rows.push(question.clone());
        Ok(question)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|q| q.id != id);

        if table.rows.len() == before {
            return Err(AppError::NotFound(format!("Question with id {} not found", id)));
        }
        Ok(())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<Vec<Category>>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self {
            categories: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn with(categories: Vec<Category>) -> Self {
        Self {
            categories: Arc::new(RwLock::new(categories)),
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_all(&self) -> AppResult<Vec<Category>> {
        let mut categories = self.categories.read().await.clone();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.iter().find(|c| c.id == id).cloned())
    }

    async fn seed(&self, categories: Vec<Category>) -> AppResult<usize> {
        let mut existing = self.categories.write().await;
        if !existing.is_empty() {
            return Ok(0);
        }

        let count = categories.len();
        existing.extend(categories);
        Ok(count)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

pub fn new_question(text: &str, category: i64) -> NewQuestion {
    NewQuestion {
        question: text.to_string(),
        answer: format!("Answer to {}", text),
        category,
        difficulty: 2,
    }
}

/// Science and Art, the categories used across the HTTP tests.
pub fn science_and_art() -> Vec<Category> {
    vec![Category::new(1, "Science"), Category::new(2, "Art")]
}
