use actix_web::{get, web, HttpRequest, HttpResponse};
use serde::Serialize;

use crate::modules::auth::application::domain::Identity;
use crate::modules::client_state::adapter::outgoing::CookieStorage;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
struct SessionResponse {
    authenticated: bool,
    identity: Option<Identity>,
}

/// Sign-in state of this browser. Never fails; anonymous callers get
/// `authenticated: false`.
#[get("/api/auth/session")]
pub async fn session_handler(req: HttpRequest, data: web::Data<AppState>) -> HttpResponse {
    let storage = CookieStorage::from_request(&req, data.cookie_policy);
    let identity = data.auth.current_identity(&storage);

    ApiResponse::success(SessionResponse {
        authenticated: identity.is_some(),
        identity,
    })
}
