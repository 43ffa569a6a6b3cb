use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

#[cfg(test)]
use mockall::automock;

use crate::{db::Database, errors::AppResult, models::domain::TestAttempt};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AttemptRepository: Send + Sync {
    async fn insert(&self, attempt: TestAttempt) -> AppResult<TestAttempt>;
    async fn find_all(&self) -> AppResult<Vec<TestAttempt>>;
    async fn count(&self) -> AppResult<u64>;
}

pub struct MongoAttemptRepository {
    collection: Collection<TestAttempt>,
}

impl MongoAttemptRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("test_attempts");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for test_attempts collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        Ok(())
    }
}

#[async_trait]
impl AttemptRepository for MongoAttemptRepository {
    async fn insert(&self, attempt: TestAttempt) -> AppResult<TestAttempt> {
        self.collection.insert_one(&attempt).await?;
        Ok(attempt)
    }

    async fn find_all(&self) -> AppResult<Vec<TestAttempt>> {
        let attempts = self
            .collection
            .find(doc! {})
            .sort(doc! { "submitted_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(attempts)
    }

    async fn count(&self) -> AppResult<u64> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }
}
