use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminIdentity;
use crate::shared::api::ApiResponse;
use crate::AppState;

const DEFAULT_LIMIT: u32 = 50;
const MAX_LIMIT: u32 = 500;

#[derive(Debug, Deserialize)]
pub struct ListVisitorsQuery {
    pub limit: Option<u32>,
}

#[get("/api/admin/visitors")]
pub async fn list_visitors_handler(
    admin: AdminIdentity,
    query: web::Query<ListVisitorsQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    match data.visitors.recent(&admin.caller, limit).await {
        Ok(visits) => ApiResponse::success(visits),
        Err(e) => {
            error!("Failed to list visitors: {}", e);
            ApiResponse::service_unavailable("STORE_UNAVAILABLE", "Visitor log is unavailable")
        }
    }
}
