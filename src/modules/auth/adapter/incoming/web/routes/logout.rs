use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::modules::client_state::adapter::outgoing::CookieStorage;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/auth/logout")]
pub async fn logout_handler(req: HttpRequest, data: web::Data<AppState>) -> HttpResponse {
    let storage = CookieStorage::from_request(&req, data.cookie_policy);
    data.auth.sign_out(&storage).await;

    let mut response = ApiResponse::no_content();
    storage.apply(&mut response);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::demo_cookie;

    #[actix_web::test]
    async fn logout_expires_the_demo_flag() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(logout_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/logout")
            .cookie(demo_cookie())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let removal = resp
            .response()
            .cookies()
            .find(|c| c.name() == "demo_mode")
            .expect("removal cookie");
        assert_eq!(removal.value(), "");
    }
}
