use actix_web::{delete, get, patch, web, HttpResponse};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::VerifiedAdmin;
use crate::modules::contact::application::ports::incoming::use_cases::ContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct MarkMessageRequest {
    pub read: bool,
}

#[get("/api/admin/messages")]
pub async fn list_messages_handler(
    VerifiedAdmin(admin): VerifiedAdmin,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.contact.list(&admin.caller).await {
        Ok(messages) => ApiResponse::success(messages),
        Err(e) => failure(e),
    }
}

#[patch("/api/admin/messages/{id}")]
pub async fn mark_message_handler(
    VerifiedAdmin(admin): VerifiedAdmin,
    path: web::Path<Uuid>,
    body: web::Json<MarkMessageRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data
        .contact
        .set_read(&admin.caller, path.into_inner(), body.read)
        .await
    {
        Ok(message) => ApiResponse::success(message),
        Err(e) => failure(e),
    }
}

#[delete("/api/admin/messages/{id}")]
pub async fn delete_message_handler(
    VerifiedAdmin(admin): VerifiedAdmin,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.contact.delete(&admin.caller, path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => failure(e),
    }
}

fn failure(e: ContactError) -> HttpResponse {
    match e {
        ContactError::NotFound => ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found"),
        ContactError::Validation(e) => ApiResponse::unprocessable("VALIDATION_ERROR", &e.to_string()),
        ContactError::Store(e) => {
            error!("Contact inbox store error: {}", e);
            ApiResponse::service_unavailable("STORE_UNAVAILABLE", "Inbox is unavailable")
        }
    }
}
