use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::AppResult,
    models::domain::Feedback,
    models::dto::request::FeedbackRequest,
    models::dto::response::FeedbackResponse,
    repositories::FeedbackRepository,
};

pub struct FeedbackService {
    feedback: Arc<dyn FeedbackRepository>,
}

impl FeedbackService {
    pub fn new(feedback: Arc<dyn FeedbackRepository>) -> Self {
        Self { feedback }
    }

    pub async fn submit(&self, request: FeedbackRequest) -> AppResult<FeedbackResponse> {
        request.validate()?;

        let feedback = Feedback::new(
            &request.name,
            &request.email,
            &request.message,
            request.rating,
        );
        let feedback = self.feedback.insert(feedback).await?;

        Ok(FeedbackResponse {
            message: "Feedback submitted successfully".to_string(),
            id: feedback.id,
        })
    }
}
