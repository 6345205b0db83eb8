use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    store: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Pings the remote store
/// - Running without a store is ready: pages render empty
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    if !data.store.is_configured() {
        return HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            store: "unconfigured",
        });
    }

    match data.store.ping().await {
        Ok(()) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            store: "ok",
        }),
        Err(e) => {
            warn!(error = %e, "Readiness check failed");
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                store: "unhealthy",
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::modules::remote_store::adapter::outgoing::InMemoryRemoteStore;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn liveness_needs_no_state() {
        let app = test::init_service(App::new().service(health)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn null_store_is_reported_as_unconfigured() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_null_store().build())
                .service(readiness),
        )
        .await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["store"], "unconfigured");
    }

    #[actix_web::test]
    async fn unreachable_store_is_not_ready() {
        let store = InMemoryRemoteStore::new();
        store.set_unavailable(true);
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_store(store).build())
                .service(readiness),
        )
        .await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
