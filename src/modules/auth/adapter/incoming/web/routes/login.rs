use actix_web::{post, web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::modules::auth::application::services::AuthError;
use crate::modules::client_state::adapter::outgoing::CookieStorage;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Login request from the admin login page.
#[derive(Debug, Deserialize)]
pub struct LoginRequestDto {
    /// Email address, or the demo username.
    pub email: String,
    pub password: String,
}

#[post("/api/auth/login")]
pub async fn login_handler(
    req: HttpRequest,
    body: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let dto = body.into_inner();
    if dto.email.trim().is_empty() || dto.password.is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Email and password are required");
    }

    info!(email = %dto.email.trim(), "Login attempt");
    let storage = CookieStorage::from_request(&req, data.cookie_policy);

    let mut response = match data.auth.sign_in(&storage, &dto.email, &dto.password).await {
        Ok(identity) => ApiResponse::success(identity),

        Err(AuthError::InvalidCredentials) | Err(AuthError::NotConfigured) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid credentials")
        }

        Err(AuthError::Provider(ref e)) => {
            error!(error = %e, "Auth provider failed during login");
            ApiResponse::service_unavailable("AUTH_UNAVAILABLE", "Sign-in is temporarily unavailable")
        }
    };

    storage.apply(&mut response);
    response
}
