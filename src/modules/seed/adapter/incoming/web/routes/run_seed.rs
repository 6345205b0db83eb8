use actix_web::{post, web, HttpResponse};
use tracing::info;

use crate::modules::auth::adapter::incoming::web::extractors::VerifiedAdmin;
use crate::modules::seed::application::services::SeedError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/admin/seed")]
pub async fn run_seed_handler(
    VerifiedAdmin(admin): VerifiedAdmin,
    data: web::Data<AppState>,
) -> HttpResponse {
    info!(user_id = %admin.identity.user_id, "Seed sync requested");

    match data.seed.run(&admin.caller).await {
        Ok(report) => ApiResponse::success(report),
        Err(SeedError::NotConfigured) => ApiResponse::service_unavailable(
            "STORE_NOT_CONFIGURED",
            "No remote store is configured",
        ),
    }
}
