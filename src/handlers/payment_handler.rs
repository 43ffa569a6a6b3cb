use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::PaymentVerificationRequest,
    models::dto::response::AccessCheckResponse,
};

#[post("/api/payment/verify")]
pub async fn verify_payment(
    state: web::Data<AppState>,
    request: web::Json<PaymentVerificationRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.payment_service.verify(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/payment/check-access/{user_id}/{set_number}")]
pub async fn check_access(
    state: web::Data<AppState>,
    path: web::Path<(String, u32)>,
) -> Result<HttpResponse, AppError> {
    let (user_id, set_number) = path.into_inner();
    let has_access = state
        .payment_service
        .check_access(&user_id, set_number)
        .await?;
    Ok(HttpResponse::Ok().json(AccessCheckResponse { has_access }))
}
