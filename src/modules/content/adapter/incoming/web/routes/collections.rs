use actix_web::{get, web, HttpResponse};

use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/certificates")]
pub async fn get_certificates_handler(data: web::Data<AppState>) -> HttpResponse {
    ApiResponse::success(data.public_content.certificates().await)
}

#[get("/api/experience")]
pub async fn get_experience_handler(data: web::Data<AppState>) -> HttpResponse {
    ApiResponse::success(data.public_content.experience().await)
}

#[get("/api/education")]
pub async fn get_education_handler(data: web::Data<AppState>) -> HttpResponse {
    ApiResponse::success(data.public_content.education().await)
}

#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> HttpResponse {
    ApiResponse::success(data.public_content.skills().await)
}
