use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Feedback {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    pub fn new(name: &str, email: &str, message: &str, rating: Option<u8>) -> Self {
        Feedback {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            rating,
            created_at: Utc::now(),
        }
    }
}
