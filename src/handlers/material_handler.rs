use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::domain::Subject,
    models::dto::request::{CreateStudyMaterialRequest, MaterialQuery},
    models::dto::response::MessageResponse,
};

#[get("/api/study-materials")]
pub async fn list_materials(
    state: web::Data<AppState>,
    query: web::Query<MaterialQuery>,
) -> Result<HttpResponse, AppError> {
    let subject = match &query.subject {
        Some(raw) => Some(raw.parse::<Subject>()?),
        None => None,
    };

    let materials = state.material_service.list(subject).await?;
    Ok(HttpResponse::Ok().json(materials))
}

#[post("/api/study-materials")]
pub async fn create_material(
    state: web::Data<AppState>,
    request: web::Json<CreateStudyMaterialRequest>,
) -> Result<HttpResponse, AppError> {
    let material = state.material_service.create(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(material))
}

#[put("/api/study-materials/{id}")]
pub async fn update_material(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<CreateStudyMaterialRequest>,
) -> Result<HttpResponse, AppError> {
    let material = state
        .material_service
        .update(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(material))
}

#[delete("/api/study-materials/{id}")]
pub async fn delete_material(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.material_service.delete(&id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Study material deleted".to_string(),
    }))
}
