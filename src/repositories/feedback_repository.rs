use async_trait::async_trait;
use mongodb::{bson::doc, Collection};

#[cfg(test)]
use mockall::automock;

use crate::{db::Database, errors::AppResult, models::domain::Feedback};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    async fn insert(&self, feedback: Feedback) -> AppResult<Feedback>;
}

pub struct MongoFeedbackRepository {
    collection: Collection<Feedback>,
}

impl MongoFeedbackRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("feedback");
        Self { collection }
    }
}

#[async_trait]
impl FeedbackRepository for MongoFeedbackRepository {
    async fn insert(&self, feedback: Feedback) -> AppResult<Feedback> {
        self.collection.insert_one(&feedback).await?;
        Ok(feedback)
    }
}
