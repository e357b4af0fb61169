use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::Category};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories, ordered by id.
    async fn find_all(&self) -> AppResult<Vec<Category>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Category>>;
    /// Inserts `categories` only when none exist yet; returns how many were written.
    async fn seed(&self, categories: Vec<Category>) -> AppResult<usize>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoCategoryRepository {
    collection: Collection<Category>,
}

impl MongoCategoryRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl CategoryRepository for MongoCategoryRepository {
    async fn find_all(&self) -> AppResult<Vec<Category>> {
        let options = FindOptions::builder().sort(doc! { "id": 1 }).build();
        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let categories: Vec<Category> = cursor.try_collect().await?;
        Ok(categories)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Category>> {
        let category = self.collection.find_one(doc! { "id": id }).await?;
        Ok(category)
    }

    async fn seed(&self, categories: Vec<Category>) -> AppResult<usize> {
        let existing = self.collection.count_documents(doc! {}).await?;
        if existing > 0 || categories.is_empty() {
            return Ok(0);
        }

        let result = self.collection.insert_many(&categories).await?;
        log::info!("Seeded {} categories", result.inserted_ids.len());
        Ok(result.inserted_ids.len())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let options = IndexOptions::builder()
            .unique(true)
            .name("id_unique".to_string())
            .build();
        let model = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(options)
            .build();

        self.collection.create_index(model).await?;
        log::info!("Created unique index on categories id field");

        Ok(())
    }
}
