use actix_web::{get, put, web, HttpRequest, HttpResponse};

use crate::modules::client_state::adapter::outgoing::CookieStorage;
use crate::modules::client_state::application::domain::Preferences;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/preferences")]
pub async fn get_preferences_handler(req: HttpRequest, data: web::Data<AppState>) -> HttpResponse {
    let storage = CookieStorage::from_request(&req, data.cookie_policy);
    ApiResponse::success(data.preferences.load(&storage))
}

#[put("/api/preferences")]
pub async fn put_preferences_handler(
    req: HttpRequest,
    body: web::Json<Preferences>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let storage = CookieStorage::from_request(&req, data.cookie_policy);
    let saved = data.preferences.save(&storage, body.into_inner());

    let mut response = ApiResponse::success(saved);
    storage.apply(&mut response);
    response
}
