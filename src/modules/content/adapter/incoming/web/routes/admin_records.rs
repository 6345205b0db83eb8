//! Admin CRUD for every content table, registered once per record type.

use actix_web::{http::StatusCode, web, HttpResponse, Scope};
use serde_json::Value;
use tracing::{error, warn};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::{AdminIdentity, VerifiedAdmin};
use crate::modules::content::application::domain::entities::{
    AdminRecord, Certificate, Education, Experience, GalleryItem, Post, Project, Skill,
};
use crate::modules::content::application::services::AdminContentError;
use crate::modules::remote_store::application::ports::outgoing::RemoteStoreError;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub fn configure_admin_content(cfg: &mut web::ServiceConfig) {
    cfg.service(admin_scope::<Project>("/api/admin/projects"))
        .service(admin_scope::<Certificate>("/api/admin/certificates"))
        .service(admin_scope::<Post>("/api/admin/posts"))
        .service(admin_scope::<GalleryItem>("/api/admin/gallery"))
        .service(admin_scope::<Experience>("/api/admin/experience"))
        .service(admin_scope::<Education>("/api/admin/education"))
        .service(admin_scope::<Skill>("/api/admin/skills"));
}

/// `GET|POST {path}` and `PATCH|DELETE {path}/{id}` for one record type.
/// Listing is open to any admin; changes need a `VerifiedAdmin`.
pub fn admin_scope<R: AdminRecord>(path: &str) -> Scope {
    web::scope(path)
        .route("", web::get().to(list_records::<R>))
        .route("", web::post().to(create_record::<R>))
        .route("/{id}", web::patch().to(update_record::<R>))
        .route("/{id}", web::delete().to(delete_record::<R>))
}

async fn list_records<R: AdminRecord>(
    admin: AdminIdentity,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.admin_content.list::<R>(&admin.caller).await {
        Ok(records) => ApiResponse::success(records),
        Err(e) => error_response::<R>(e),
    }
}

async fn create_record<R: AdminRecord>(
    VerifiedAdmin(admin): VerifiedAdmin,
    body: web::Json<R>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.admin_content.create(&admin.caller, body.into_inner()).await {
        Ok(record) => ApiResponse::created(record),
        Err(e) => error_response::<R>(e),
    }
}

async fn update_record<R: AdminRecord>(
    VerifiedAdmin(admin): VerifiedAdmin,
    path: web::Path<Uuid>,
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data
        .admin_content
        .update::<R>(&admin.caller, path.into_inner(), body.into_inner())
        .await
    {
        Ok(record) => ApiResponse::success(record),
        Err(e) => error_response::<R>(e),
    }
}

async fn delete_record<R: AdminRecord>(
    VerifiedAdmin(admin): VerifiedAdmin,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.admin_content.delete::<R>(&admin.caller, path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => error_response::<R>(e),
    }
}

fn error_response<R: AdminRecord>(e: AdminContentError) -> HttpResponse {
    match e {
        AdminContentError::NotFound => {
            ApiResponse::not_found("RECORD_NOT_FOUND", "Record not found")
        }
        AdminContentError::Validation(e) => {
            ApiResponse::unprocessable("VALIDATION_ERROR", &e.to_string())
        }
        AdminContentError::InvalidPatch(msg) => ApiResponse::bad_request("INVALID_PATCH", &msg),
        AdminContentError::Store(RemoteStoreError::Api { status: 409, message }) => {
            warn!(table = R::TABLE, "Conflicting write: {}", message);
            ApiResponse::error(
                StatusCode::CONFLICT,
                "CONFLICT",
                "A record with the same unique key already exists",
            )
        }
        AdminContentError::Store(e) => {
            error!(table = R::TABLE, error = %e, "Admin write failed");
            ApiResponse::service_unavailable("STORE_UNAVAILABLE", "Content store is unavailable")
        }
    }
}
