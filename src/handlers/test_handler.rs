use actix_web::{post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::request::TestSubmission};

#[post("/api/test/submit")]
pub async fn submit_test(
    state: web::Data<AppState>,
    submission: web::Json<TestSubmission>,
) -> Result<HttpResponse, AppError> {
    let response = state.scoring_service.score(submission.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
