use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{
        AdminLoginRequest, AdminQuestionsQuery, BulkQuestionsRequest, UpdateQuestionRequest,
    },
    models::dto::response::{BulkInsertResponse, DeleteSetResponse, MessageResponse},
};

#[post("/api/admin/login")]
pub async fn admin_login(
    state: web::Data<AppState>,
    request: web::Json<AdminLoginRequest>,
) -> Result<HttpResponse, AppError> {
    state.admin_service.login(&request)?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Login successful".to_string(),
    }))
}

#[post("/api/admin/questions/bulk")]
pub async fn bulk_insert_questions(
    state: web::Data<AppState>,
    request: web::Json<BulkQuestionsRequest>,
) -> Result<HttpResponse, AppError> {
    let inserted = state
        .question_service
        .bulk_insert(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(BulkInsertResponse { inserted }))
}

#[get("/api/admin/questions")]
pub async fn list_questions(
    state: web::Data<AppState>,
    query: web::Query<AdminQuestionsQuery>,
) -> Result<HttpResponse, AppError> {
    let questions = state.question_service.list_by_set(query.set_number).await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[put("/api/admin/questions/{id}")]
pub async fn update_question(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let question = state
        .question_service
        .update_question(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(question))
}

#[delete("/api/admin/questions/{id}")]
pub async fn delete_question(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.question_service.delete_question(&id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Question deleted".to_string(),
    }))
}

#[get("/api/admin/question-sets")]
pub async fn list_question_sets(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let sets = state.question_service.question_sets().await?;
    Ok(HttpResponse::Ok().json(sets))
}

#[delete("/api/admin/question-sets/{set_number}")]
pub async fn delete_question_set(
    state: web::Data<AppState>,
    set_number: web::Path<u32>,
) -> Result<HttpResponse, AppError> {
    let set_number = set_number.into_inner();
    let deleted = state.question_service.delete_set(set_number).await?;
    Ok(HttpResponse::Ok().json(DeleteSetResponse {
        message: format!("Question set {} deleted", set_number),
        deleted,
    }))
}

#[get("/api/admin/test-attempts")]
pub async fn list_test_attempts(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let attempts = state.admin_service.list_attempts().await?;
    Ok(HttpResponse::Ok().json(attempts))
}

#[get("/api/admin/users")]
pub async fn list_users(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = state.user_service.list_users().await?;
    Ok(HttpResponse::Ok().json(users))
}
