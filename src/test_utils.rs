use crate::models::domain::{Category, Question};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Science and Art, ids 1 and 2.
    pub fn test_categories() -> Vec<Category> {
        vec![Category::new(1, "Science"), Category::new(2, "Art")]
    }

    /// Creates a question with readable text in the given category
    pub fn test_question(id: i64, text: &str, category: i64) -> Question {
        Question {
            id,
            question: text.to_string(),
            answer: format!("Answer to {}", text),
            category,
            difficulty: 1,
        }
    }

    /// A small bank spread across both test categories
    pub fn test_questions() -> Vec<Question> {
        vec![
            test_question(1, "What is the boiling point of water?", 1),
            test_question(2, "Who painted the Mona Lisa?", 2),
            test_question(3, "What is the chemical symbol for gold?", 1),
        ]
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::{body::MessageBody, dev::ServiceResponse, http::StatusCode, test};

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }

    /// Reads an error response and checks it carries the common error body.
    pub async fn assert_error_body<B: MessageBody>(
        resp: ServiceResponse<B>,
        expected: StatusCode,
    ) -> serde_json::Value {
        assert_error_status(resp.status());
        assert_eq!(resp.status(), expected);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], expected.as_u16());
        assert!(body["message"].is_string());
        body
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_test_categories() {
        let categories = test_categories();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].kind, "Science");
    }

    #[test]
    fn test_fixtures_test_questions() {
        let questions = test_questions();
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q.category == 1 || q.category == 2));
        assert_eq!(questions[1].answer, "Answer to Who painted the Mona Lisa?");
    }
}
