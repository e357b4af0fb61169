use serde::{de::Error as _, Deserialize, Deserializer};
use validator::Validate;

use crate::models::domain::CategorySelector;
use crate::services::pagination::parse_page;

/// A JSON value that front ends send either as a number or as a numeric
/// string, depending on whether it came from a form control.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i64),
    Text(String),
}

impl IntOrString {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            IntOrString::Int(value) => Some(*value),
            IntOrString::Text(value) => value.trim().parse().ok(),
        }
    }
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    IntOrString::deserialize(deserializer)?
        .as_i64()
        .ok_or_else(|| D::Error::custom("expected an integer"))
}

fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_i64(deserializer)?;
    i32::try_from(value).map_err(|_| D::Error::custom("integer out of range"))
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 1000, message = "question must be 1 to 1000 characters"))]
    pub question: String,

    #[validate(length(min = 1, max = 1000, message = "answer must be 1 to 1000 characters"))]
    pub answer: String,

    #[serde(deserialize_with = "lenient_i64")]
    #[validate(range(min = 1, message = "category must be a positive id"))]
    pub category: i64,

    #[serde(deserialize_with = "lenient_i32")]
    #[validate(range(min = 1, max = 5, message = "difficulty must be between 1 and 5"))]
    pub difficulty: i32,
}

impl CreateQuestionRequest {
    /// Trims surrounding whitespace so blank text fails validation.
    pub fn normalized(self) -> Self {
        CreateQuestionRequest {
            question: self.question.trim().to_string(),
            answer: self.answer.trim().to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: String,
}

/// `?page=` accepts anything; non-numeric values fall back to page 1.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        parse_page(self.page.as_deref())
    }
}

/// `type` is sent by the front end alongside the id and is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategoryInput {
    pub id: IntOrString,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryInput>,
}

impl QuizRequest {
    /// Resolves the category selector; `None` means the id was not a
    /// usable category id.
    pub fn selector(&self) -> Option<CategorySelector> {
        match &self.quiz_category {
            None => Some(CategorySelector::All),
            Some(category) => category.id.as_i64().and_then(CategorySelector::from_id),
        }
    }
}
