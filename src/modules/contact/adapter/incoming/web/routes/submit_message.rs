use actix_web::{post, web, HttpResponse};
use tracing::error;

use crate::modules::contact::application::domain::NewContactMessage;
use crate::modules::contact::application::ports::incoming::use_cases::ContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/contact")]
pub async fn submit_message_handler(
    body: web::Json<NewContactMessage>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.contact.submit(body.into_inner()).await {
        Ok(message) => ApiResponse::created(message),
        Err(ContactError::Validation(e)) => {
            ApiResponse::unprocessable("VALIDATION_ERROR", &e.to_string())
        }
        Err(e) => {
            error!("Failed to store contact message: {}", e);
            ApiResponse::service_unavailable(
                "STORE_UNAVAILABLE",
                "Your message could not be sent, please try again later",
            )
        }
    }
}
