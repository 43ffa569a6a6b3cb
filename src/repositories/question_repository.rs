use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson},
    Collection,
};

#[cfg(test)]
use mockall::automock;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{Question, Subject},
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Question>>;
    async fn find_by_subject(&self, subject: Subject) -> AppResult<Vec<Question>>;
    async fn find_by_set(&self, set_number: u32) -> AppResult<Vec<Question>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>>;
    async fn insert_many(&self, questions: Vec<Question>) -> AppResult<usize>;
    async fn update(&self, question: Question) -> AppResult<Question>;
    async fn delete(&self, id: &str) -> AppResult<()>;
    async fn delete_by_set(&self, set_number: u32) -> AppResult<u64>;
    async fn list_set_numbers(&self) -> AppResult<Vec<u32>>;
    async fn count_by_set_and_subject(&self, set_number: u32, subject: Subject) -> AppResult<u64>;
}

pub struct MongoQuestionRepository {
    collection: Collection<Question>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("questions");
        Self { collection }
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Question>> {
        let cursor = self
            .collection
            .find(doc! { "id": { "$in": ids.to_vec() } })
            .await?;
        let questions: Vec<Question> = cursor.try_collect().await?;
        Ok(questions)
    }

    async fn find_by_subject(&self, subject: Subject) -> AppResult<Vec<Question>> {
        let cursor = self
            .collection
            .find(doc! { "subject": subject.as_str() })
            .sort(doc! { "question_number": 1 })
            .await?;
        let questions: Vec<Question> = cursor.try_collect().await?;
        Ok(questions)
    }

    async fn find_by_set(&self, set_number: u32) -> AppResult<Vec<Question>> {
        let cursor = self
            .collection
            .find(doc! { "set_number": set_number })
            .sort(doc! { "subject": 1, "question_number": 1 })
            .await?;
        let questions: Vec<Question> = cursor.try_collect().await?;
        Ok(questions)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        let question = self.collection.find_one(doc! { "id": id }).await?;
        Ok(question)
    }

    async fn insert_many(&self, questions: Vec<Question>) -> AppResult<usize> {
        let result = self.collection.insert_many(&questions).await?;
        Ok(result.inserted_ids.len())
    }

    async fn update(&self, question: Question) -> AppResult<Question> {
        let result = self
            .collection
            .replace_one(doc! { "id": &question.id }, &question)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Question with id '{}' not found",
                question.id
            )));
        }

        Ok(question)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Question with id '{}' not found",
                id
            )));
        }

        Ok(())
    }

    async fn delete_by_set(&self, set_number: u32) -> AppResult<u64> {
        let result = self
            .collection
            .delete_many(doc! { "set_number": set_number })
            .await?;
        Ok(result.deleted_count)
    }

    async fn list_set_numbers(&self) -> AppResult<Vec<u32>> {
        let values = self.collection.distinct("set_number", doc! {}).await?;

        let mut sets: Vec<u32> = values
            .iter()
            .filter_map(|value| match value {
                Bson::Int32(n) => u32::try_from(*n).ok(),
                Bson::Int64(n) => u32::try_from(*n).ok(),
                _ => None,
            })
            .collect();
        sets.sort_unstable();
        Ok(sets)
    }

    async fn count_by_set_and_subject(&self, set_number: u32, subject: Subject) -> AppResult<u64> {
        let count = self
            .collection
            .count_documents(doc! { "set_number": set_number, "subject": subject.as_str() })
            .await?;
        Ok(count)
    }
}
