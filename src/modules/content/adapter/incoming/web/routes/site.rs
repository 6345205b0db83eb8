use actix_web::{get, web, HttpResponse};

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Every section of the public page in one round trip. Sections fail
/// independently; a broken one comes back empty with its `error` set.
#[get("/api/site")]
pub async fn get_site_handler(data: web::Data<AppState>) -> HttpResponse {
    ApiResponse::success(data.public_content.site().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::modules::content::application::domain::entities::ContentStatus;
    use crate::modules::remote_store::adapter::outgoing::InMemoryRemoteStore;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::{sample_project, sample_skill, seed};

    #[actix_web::test]
    async fn returns_every_section() {
        let store = InMemoryRemoteStore::new();
        seed(&store, &[sample_project("site-one", ContentStatus::Published)]).await;
        seed(&store, &[sample_skill("Rust", 1)]).await;
        let state = TestAppStateBuilder::default().with_store(store).build();
        let app = test::init_service(App::new().app_data(state).service(get_site_handler)).await;

        let req = test::TestRequest::get().uri("/api/site").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let data = &body["data"];
        assert_eq!(data["projects"]["data"].as_array().unwrap().len(), 1);
        assert_eq!(data["skills"]["data"].as_array().unwrap().len(), 1);
        for section in ["certificates", "experience", "education", "gallery", "posts"] {
            assert!(data[section]["data"].as_array().unwrap().is_empty(), "{section}");
            assert_eq!(data[section]["loading"], false);
        }
    }
}
