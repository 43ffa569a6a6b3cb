use actix_web::{post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::request::FeedbackRequest};

#[post("/api/feedback")]
pub async fn submit_feedback(
    state: web::Data<AppState>,
    request: web::Json<FeedbackRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.feedback_service.submit(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
