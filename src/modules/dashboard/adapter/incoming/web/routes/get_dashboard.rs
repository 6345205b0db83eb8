use actix_web::{get, web, HttpResponse};

use crate::modules::auth::adapter::incoming::web::extractors::AdminIdentity;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/dashboard")]
pub async fn get_dashboard_handler(
    admin: AdminIdentity,
    data: web::Data<AppState>,
) -> HttpResponse {
    ApiResponse::success(data.dashboard.stats(&admin.caller).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::modules::remote_store::adapter::outgoing::InMemoryRemoteStore;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::demo_cookie;
    use crate::tests::support::fixtures::{sample_skill, seed};

    #[actix_web::test]
    async fn returns_stats_for_admins() {
        let store = InMemoryRemoteStore::new();
        seed(&store, &[sample_skill("Rust", 1), sample_skill("SQL", 2)]).await;
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_store(store).build())
                .service(get_dashboard_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/dashboard")
            .cookie(demo_cookie())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["skills"], 2);
        assert_eq!(body["data"]["years_of_experience"], 0);
    }

    #[actix_web::test]
    async fn redirects_anonymous_callers_to_login() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_dashboard_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/admin/dashboard").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
