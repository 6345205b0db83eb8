use actix_web::{get, web, HttpResponse};
use tracing::error;

use crate::modules::content::application::ports::incoming::use_cases::{
    ContentLookupError, ProjectListFilter,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Published projects. `?featured=true`, `?tag=`, `?limit=` narrow the list.
#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<ProjectListFilter>,
    data: web::Data<AppState>,
) -> HttpResponse {
    ApiResponse::success(data.public_content.projects(query.into_inner()).await)
}

#[get("/api/projects/{slug}")]
pub async fn get_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let slug = path.into_inner();

    match data.public_content.project_by_slug(&slug).await {
        Ok(Some(project)) => ApiResponse::success(project),
        Ok(None) => ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found"),
        Err(ContentLookupError::QueryFailed(msg)) => {
            error!("Failed to fetch project {}: {}", slug, msg);
            ApiResponse::service_unavailable("STORE_UNAVAILABLE", "Content is temporarily unavailable")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::modules::content::application::domain::entities::ContentStatus;
    use crate::modules::remote_store::adapter::outgoing::InMemoryRemoteStore;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::{sample_project, seed};

    async fn store_with_projects() -> InMemoryRemoteStore {
        let store = InMemoryRemoteStore::new();
        let mut featured = sample_project("ferris-cli", ContentStatus::Published);
        featured.featured = true;
        seed(
            &store,
            &[
                featured,
                sample_project("web-crawler", ContentStatus::Published),
                sample_project("unfinished", ContentStatus::Draft),
            ],
        )
        .await;
        store
    }

    #[actix_web::test]
    async fn lists_published_projects_only() {
        let state = TestAppStateBuilder::default()
            .with_store(store_with_projects().await)
            .build();
        let app = test::init_service(App::new().app_data(state).service(get_projects_handler)).await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["loading"], false);
        assert_eq!(body["data"]["data"].as_array().unwrap().len(), 2);

        let req = test::TestRequest::get()
            .uri("/api/projects?featured=true")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"]["data"][0]["slug"], "ferris-cli");
    }

    #[actix_web::test]
    async fn unavailable_store_still_answers_ok_with_an_error_field() {
        let store = store_with_projects().await;
        store.set_unavailable(true);
        let state = TestAppStateBuilder::default().with_store(store).build();
        let app = test::init_service(App::new().app_data(state).service(get_projects_handler)).await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["data"]["data"].as_array().unwrap().is_empty());
        assert!(body["data"]["error"].is_string());
    }

    #[actix_web::test]
    async fn slug_lookup_hides_drafts() {
        let state = TestAppStateBuilder::default()
            .with_store(store_with_projects().await)
            .build();
        let app = test::init_service(App::new().app_data(state).service(get_project_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/projects/web-crawler")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri("/api/projects/unfinished")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn slug_lookup_failure_is_service_unavailable() {
        let store = store_with_projects().await;
        store.set_unavailable(true);
        let state = TestAppStateBuilder::default().with_store(store).build();
        let app = test::init_service(App::new().app_data(state).service(get_project_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/projects/web-crawler")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
