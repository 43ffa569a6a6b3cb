use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError};

#[get("/api/questions/sample")]
pub async fn sample_questions(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let response = state.question_service.sample_question_set().await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/questions/full")]
pub async fn full_questions(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let response = state.question_service.full_question_set().await?;
    Ok(HttpResponse::Ok().json(response))
}
