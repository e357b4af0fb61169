use std::env;
use secrecy::SecretString;

use crate::services::pagination::QUESTIONS_PER_PAGE;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: SecretString,
    pub mongo_db_name: String,
    pub questions_collection: String,
    pub categories_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub questions_per_page: usize,
    pub seed_categories: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: SecretString::from(
                env::var("MONGO_CONN_STRING")
                    .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            ),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "trivia-local".to_string()),
            questions_collection: env::var("QUESTIONS_COLLECTION")
                .unwrap_or_else(|_| "questions".to_string()),
            categories_collection: env::var("CATEGORIES_COLLECTION")
                .unwrap_or_else(|_| "categories".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            questions_per_page: env::var("QUESTIONS_PER_PAGE")
                .ok()
                .and_then(|p| p.parse().ok())
                .filter(|p: &usize| *p > 0)
                .unwrap_or(QUESTIONS_PER_PAGE),
            seed_categories: env::var("SEED_CATEGORIES")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: SecretString::from("mongodb://localhost:27017".to_string()),
            mongo_db_name: "trivia-test".to_string(),
            questions_collection: "questions".to_string(),
            categories_collection: "categories".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            questions_per_page: QUESTIONS_PER_PAGE,
            seed_categories: false,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.mongo_db_name.is_empty());
        assert!(config.questions_per_page > 0);
    }

    #[test]
    fn test_test_config() {
        use secrecy::ExposeSecret;

        let config = Config::test_config();

        assert_eq!(config.mongo_conn_string.expose_secret(), "mongodb://localhost:27017");
        assert_eq!(config.mongo_db_name, "trivia-test");
        assert_eq!(config.questions_collection, "questions");
        assert_eq!(config.questions_per_page, 10);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(" OFF "));
    }
}
