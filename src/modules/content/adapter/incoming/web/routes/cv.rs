use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CvQuery {
    pub print: Option<String>,
}

impl CvQuery {
    fn auto_print(&self) -> bool {
        matches!(self.print.as_deref(), Some("" | "1" | "true"))
    }
}

/// Printable CV. With `?print=1` the page opens the print dialog on load.
#[get("/api/cv")]
pub async fn get_cv_handler(query: web::Query<CvQuery>, data: web::Data<AppState>) -> HttpResponse {
    ApiResponse::success(data.public_content.cv(query.auto_print()).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn print_flag_controls_auto_print() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_cv_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/cv?print=1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["auto_print"], true);

        let req = test::TestRequest::get().uri("/api/cv").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["auto_print"], false);

        let req = test::TestRequest::get().uri("/api/cv?print=0").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["auto_print"], false);
    }
}
