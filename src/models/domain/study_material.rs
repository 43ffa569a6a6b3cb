use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::Subject;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct StudyMaterial {
    pub id: String,
    pub title: String,
    pub description: String,
    pub subject: Subject,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl StudyMaterial {
    pub fn new(
        title: &str,
        description: &str,
        subject: Subject,
        content: &str,
        file_url: Option<String>,
    ) -> Self {
        StudyMaterial {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            subject,
            content: content.to_string(),
            file_url,
            created_at: Utc::now(),
        }
    }
}
