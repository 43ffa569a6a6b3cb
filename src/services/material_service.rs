use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{StudyMaterial, Subject},
    models::dto::request::CreateStudyMaterialRequest,
    repositories::StudyMaterialRepository,
};

pub struct MaterialService {
    materials: Arc<dyn StudyMaterialRepository>,
}

impl MaterialService {
    pub fn new(materials: Arc<dyn StudyMaterialRepository>) -> Self {
        Self { materials }
    }

    pub async fn list(&self, subject: Option<Subject>) -> AppResult<Vec<StudyMaterial>> {
        match subject {
            Some(subject) => self.materials.find_by_subject(subject).await,
            None => self.materials.find_all().await,
        }
    }

    pub async fn create(&self, request: CreateStudyMaterialRequest) -> AppResult<StudyMaterial> {
        request.validate()?;

        let material = StudyMaterial::new(
            &request.title,
            &request.description,
            request.subject,
            &request.content,
            request.file_url,
        );
        self.materials.insert(material).await
    }

    pub async fn update(
        &self,
        id: &str,
        request: CreateStudyMaterialRequest,
    ) -> AppResult<StudyMaterial> {
        request.validate()?;

        let mut material = self.materials.find_by_id(id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Study material with id '{}' not found", id))
        })?;

        material.title = request.title;
        material.description = request.description;
        material.subject = request.subject;
        material.content = request.content;
        material.file_url = request.file_url;

        self.materials.update(material).await
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.materials.delete(id).await
    }
}
