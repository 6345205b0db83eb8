use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

use crate::modules::content::application::domain::entities::GalleryCategory;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    pub category: Option<GalleryCategory>,
}

#[get("/api/gallery")]
pub async fn get_gallery_handler(
    query: web::Query<GalleryQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    ApiResponse::success(data.public_content.gallery(query.category).await)
}
