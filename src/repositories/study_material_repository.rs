use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

#[cfg(test)]
use mockall::automock;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{StudyMaterial, Subject},
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait StudyMaterialRepository: Send + Sync {
    async fn insert(&self, material: StudyMaterial) -> AppResult<StudyMaterial>;
    async fn find_all(&self) -> AppResult<Vec<StudyMaterial>>;
    async fn find_by_subject(&self, subject: Subject) -> AppResult<Vec<StudyMaterial>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<StudyMaterial>>;
    async fn update(&self, material: StudyMaterial) -> AppResult<StudyMaterial>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct MongoStudyMaterialRepository {
    collection: Collection<StudyMaterial>,
}

impl MongoStudyMaterialRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("study_materials");
        Self { collection }
    }
}

#[async_trait]
impl StudyMaterialRepository for MongoStudyMaterialRepository {
    async fn insert(&self, material: StudyMaterial) -> AppResult<StudyMaterial> {
        self.collection.insert_one(&material).await?;
        Ok(material)
    }

    async fn find_all(&self) -> AppResult<Vec<StudyMaterial>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await?;
        let materials: Vec<StudyMaterial> = cursor.try_collect().await?;
        Ok(materials)
    }

    async fn find_by_subject(&self, subject: Subject) -> AppResult<Vec<StudyMaterial>> {
        let cursor = self
            .collection
            .find(doc! { "subject": subject.as_str() })
            .sort(doc! { "created_at": -1 })
            .await?;
        let materials: Vec<StudyMaterial> = cursor.try_collect().await?;
        Ok(materials)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<StudyMaterial>> {
        let material = self.collection.find_one(doc! { "id": id }).await?;
        Ok(material)
    }

    async fn update(&self, material: StudyMaterial) -> AppResult<StudyMaterial> {
        let result = self
            .collection
            .replace_one(doc! { "id": &material.id }, &material)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Study material with id '{}' not found",
                material.id
            )));
        }

        Ok(material)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Study material with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
