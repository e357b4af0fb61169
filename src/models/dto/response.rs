use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::domain::{Category, Question};

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: BTreeMap<i64, String>,
}

impl From<Vec<Category>> for CategoriesResponse {
    fn from(categories: Vec<Category>) -> Self {
        CategoriesResponse {
            categories: categories.into_iter().map(|c| (c.id, c.kind)).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub categories: Vec<Category>,
    pub total_questions: usize,
    pub current_category: String,
    pub page: i64,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub category: Option<String>,
    pub page: i64,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
    pub page: i64,
}

#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub message: String,
}

impl DeleteQuestionResponse {
    pub fn deleted(id: i64) -> Self {
        DeleteQuestionResponse {
            success: true,
            message: format!("Question ID {} has been deleted", id),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        SuccessResponse { success: true }
    }
}

/// `question` is left out entirely once the quiz has nothing left to ask.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}
