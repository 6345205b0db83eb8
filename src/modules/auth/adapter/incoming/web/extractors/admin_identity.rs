use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};

use crate::modules::auth::application::domain::Identity;
use crate::modules::client_state::adapter::outgoing::CookieStorage;
use crate::modules::remote_store::application::domain::Caller;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Gate for admin routes. Accepts a Bearer access token or the browser's
/// stored sign-in state (signed demo flag or access token cookie).
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub identity: Identity,
    /// Credentials store calls made for this admin carry.
    pub caller: Caller,
}

/// Gate for routes that change data or read the inbox. The demo identity
/// only passes while no store is configured, so it never touches live data.
#[derive(Debug, Clone)]
pub struct VerifiedAdmin(pub AdminIdentity);

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn resolve_admin(req: &HttpRequest) -> Result<AdminIdentity, ActixError> {
    let Some(data) = req.app_data::<web::Data<AppState>>() else {
        return Err(create_api_error(ApiResponse::internal_error()));
    };

    let credentials = match extract_token_from_header(req) {
        Some(token) => data.auth.credentials_from_token(token),
        None => {
            let storage = CookieStorage::from_request(req, data.cookie_policy);
            data.auth.current_credentials(&storage)
        }
    };

    match credentials {
        Some((identity, caller)) => Ok(AdminIdentity { identity, caller }),
        None => Err(create_api_error(ApiResponse::unauthorized(
            "LOGIN_REQUIRED",
            "Sign in at /admin/login to continue",
        ))),
    }
}

impl FromRequest for AdminIdentity {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(resolve_admin(req))
    }
}

impl FromRequest for VerifiedAdmin {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let admin = match resolve_admin(req) {
            Ok(admin) => admin,
            Err(e) => return ready(Err(e)),
        };

        let store_configured = req
            .app_data::<web::Data<AppState>>()
            .is_some_and(|data| data.store.is_configured());
        if admin.identity.demo && store_configured {
            tracing::info!(path = %req.path(), "Demo session refused a privileged admin route");
            return ready(Err(create_api_error(ApiResponse::forbidden(
                "DEMO_READ_ONLY",
                "The demo account cannot change or read private data",
            ))));
        }

        ready(Ok(VerifiedAdmin(admin)))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, App, Responder};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, demo_cookie, unsigned_demo_cookie};

    #[get("/guarded")]
    async fn guarded(admin: AdminIdentity) -> impl Responder {
        ApiResponse::success(admin.identity)
    }

    #[get("/privileged")]
    async fn privileged(admin: VerifiedAdmin) -> impl Responder {
        ApiResponse::success(admin.0.identity)
    }

    #[actix_web::test]
    async fn anonymous_requests_are_sent_to_login() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(guarded),
        )
        .await;

        let req = test::TestRequest::get().uri("/guarded").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "LOGIN_REQUIRED");
    }

    #[actix_web::test]
    async fn demo_cookie_passes_the_gate() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(guarded),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/guarded")
            .cookie(demo_cookie())
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["demo"], true);
    }

    #[actix_web::test]
    async fn unverifiable_bearer_token_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(guarded),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", "Bearer not-a-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn hand_written_demo_flag_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(guarded),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/guarded")
            .cookie(unsigned_demo_cookie())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn bearer_admin_passes_both_gates() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(guarded)
                .service(privileged),
        )
        .await;

        for uri in ["/guarded", "/privileged"] {
            let req = test::TestRequest::get()
                .uri(uri)
                .insert_header(admin_bearer())
                .to_request();
            let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body["data"]["user_id"], "admin-1");
        }
    }

    #[actix_web::test]
    async fn demo_identity_is_refused_privileged_routes_on_a_live_store() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(privileged),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/privileged")
            .cookie(demo_cookie())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "DEMO_READ_ONLY");
    }

    #[actix_web::test]
    async fn demo_identity_passes_privileged_routes_without_a_store() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_null_store().build())
                .service(privileged),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/privileged")
            .cookie(demo_cookie())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
