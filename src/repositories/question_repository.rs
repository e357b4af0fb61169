use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    error::{ErrorKind, WriteFailure},
    options::{
        FindOneAndUpdateOptions, FindOneOptions, FindOptions, IndexOptions, ReturnDocument,
        UpdateOptions,
    },
    Collection, IndexModel,
};
use serde::{Deserialize, Serialize};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{NewQuestion, Question},
};

const DUPLICATE_KEY_CODE: i32 = 11000;
const QUESTION_TEXT_INDEX: &str = "question_text_unique";
const COUNTERS_COLLECTION: &str = "counters";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions, ordered by id.
    async fn find_all(&self) -> AppResult<Vec<Question>>;
    async fn find_by_category(&self, category_id: i64) -> AppResult<Vec<Question>>;
    /// Case-insensitive substring match on the question text, ordered by id.
    async fn search(&self, term: &str) -> AppResult<Vec<Question>>;
    /// Fails with `UnprocessableEntity` when the text already exists.
    async fn create(&self, question: NewQuestion) -> AppResult<Question>;
    async fn delete(&self, id: i64) -> AppResult<()>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct Counter {
    #[serde(rename = "_id")]
    name: String,
    seq: i64,
}

pub struct MongoQuestionRepository {
    collection: Collection<Question>,
    counters: Collection<Counter>,
    counter_name: String,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection(collection_name),
            counters: db.collection(COUNTERS_COLLECTION),
            counter_name: collection_name.to_string(),
        }
    }

    /// Raises the id counter to the highest stored id, so rows loaded
    /// outside the API never collide with newly assigned ids.
    pub async fn sync_id_counter(&self) -> AppResult<()> {
        let options = FindOneOptions::builder().sort(doc! { "id": -1 }).build();
        let highest = self
            .collection
            .find_one(doc! {})
            .with_options(options)
            .await?
            .map(|q| q.id)
            .unwrap_or(0);

        let options = UpdateOptions::builder().upsert(true).build();
        self.counters
            .update_one(
                doc! { "_id": &self.counter_name },
                doc! { "$max": { "seq": highest } },
            )
            .with_options(options)
            .await?;

        log::info!("Question id counter synced to {}", highest);
        Ok(())
    }

    async fn next_id(&self) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .counters
            .find_one_and_update(
                doc! { "_id": &self.counter_name },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await?
            .ok_or_else(|| AppError::InternalError("question id counter missing".to_string()))?;

        Ok(counter.seq)
    }

    async fn find_sorted(&self, filter: Document) -> AppResult<Vec<Question>> {
        let options = FindOptions::builder().sort(doc! { "id": 1 }).build();
        let cursor = self.collection.find(filter).with_options(options).await?;
        let questions: Vec<Question> = cursor.try_collect().await?;
        Ok(questions)
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}

fn search_filter(term: &str) -> Document {
    doc! {
        "question": {
            "$regex": regex::escape(term),
            "$options": "i",
        }
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn find_all(&self) -> AppResult<Vec<Question>> {
        self.find_sorted(doc! {}).await
    }

    async fn find_by_category(&self, category_id: i64) -> AppResult<Vec<Question>> {
        self.find_sorted(doc! { "category": category_id }).await
    }

    async fn search(&self, term: &str) -> AppResult<Vec<Question>> {
        self.find_sorted(search_filter(term)).await
    }

    async fn create(&self, question: NewQuestion) -> AppResult<Question> {
        let question = question.with_id(self.next_id().await?);

        match self.collection.insert_one(&question).await {
            Ok(_) => Ok(question),
            Err(err) if is_duplicate_key(&err) => Err(AppError::UnprocessableEntity(format!(
                "A question with the text '{}' already exists",
                question.question
            ))),
            Err(err) => Err(err.into()),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Question with id {} not found",
                id
            )));
        }

        Ok(())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for questions collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let text_index = IndexModel::builder()
            .keys(doc! { "question": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name(QUESTION_TEXT_INDEX.to_string())
                    .build(),
            )
            .build();

        let category_index = IndexModel::builder()
            .keys(doc! { "category": 1, "id": 1 })
            .build();

        self.collection
            .create_indexes([id_index, text_index, category_index])
            .await?;

        log::info!("Successfully created indexes for questions collection");
        Ok(())
    }
}
