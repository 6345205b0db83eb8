// src/shared/api/json_config.rs
use actix_web::web::JsonConfig;

use crate::shared::api::ApiResponse;

/// Body size cap for JSON payloads (contact messages are the largest).
const JSON_LIMIT_BYTES: usize = 64 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_LIMIT_BYTES)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
