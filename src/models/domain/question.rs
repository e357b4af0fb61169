use serde::{Deserialize, Serialize};

use crate::models::dto::request::CreateQuestionRequest;

/// A trivia question as stored and as sent over the wire.
///
/// `id` is assigned by the store; MongoDB's own `_id` is ignored on read.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

/// A question that has passed validation but has no id yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

impl NewQuestion {
    pub fn from_request(request: CreateQuestionRequest) -> Self {
        NewQuestion {
            question: request.question,
            answer: request.answer,
            category: request.category,
            difficulty: request.difficulty,
        }
    }

    pub fn with_id(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[cfg(test)]
impl Question {
    pub fn test_question(id: i64, category: i64) -> Self {
        Question {
            id,
            question: format!("Question {}?", id),
            answer: format!("Answer {}", id),
            category,
            difficulty: 1,
        }
    }
}
