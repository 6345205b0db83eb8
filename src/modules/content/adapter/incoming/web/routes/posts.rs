use actix_web::{get, web, HttpResponse};
use tracing::error;

use crate::modules::content::application::ports::incoming::use_cases::ContentLookupError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/posts")]
pub async fn get_posts_handler(data: web::Data<AppState>) -> HttpResponse {
    ApiResponse::success(data.public_content.posts().await)
}

#[get("/api/posts/{slug}")]
pub async fn get_post_handler(path: web::Path<String>, data: web::Data<AppState>) -> HttpResponse {
    let slug = path.into_inner();

    match data.public_content.post_by_slug(&slug).await {
        Ok(Some(post)) => ApiResponse::success(post),
        Ok(None) => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),
        Err(ContentLookupError::QueryFailed(msg)) => {
            error!("Failed to fetch post {}: {}", slug, msg);
            ApiResponse::service_unavailable("STORE_UNAVAILABLE", "Content is temporarily unavailable")
        }
    }
}
