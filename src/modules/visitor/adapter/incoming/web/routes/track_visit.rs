use actix_web::{http::header, post, web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::modules::client_state::adapter::outgoing::CookieStorage;
use crate::modules::visitor::application::domain::{PageVisit, Viewport};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TrackVisitRequest {
    pub path: String,
    #[serde(default)]
    pub referrer: Option<String>,
    #[serde(default)]
    pub viewport: Option<Viewport>,
}

#[derive(Debug, Serialize)]
struct TrackVisitResponse {
    session_id: String,
    deduplicated: bool,
}

/// Records a page view. The store write runs after the response is sent and
/// its failure never reaches the browser.
#[post("/api/visits")]
pub async fn track_visit_handler(
    req: HttpRequest,
    body: web::Json<TrackVisitRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let body = body.into_inner();
    let storage = CookieStorage::from_request(&req, data.cookie_policy);
    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let visit = PageVisit {
        path: body.path,
        referrer: body.referrer,
        user_agent,
        viewport: body.viewport,
    };
    if let Err(e) = visit.validate() {
        return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
    }

    let session_id = data.visitors.session_id(&storage);
    let prepared = data.visitors.prepare(&storage, visit);
    let deduplicated = prepared.is_none();

    if let Some(visitor) = prepared {
        let tracker = data.visitors.clone();
        actix_web::rt::spawn(async move {
            tracker.record(visitor).await;
        });
    }

    let mut response = ApiResponse::accepted(TrackVisitResponse {
        session_id,
        deduplicated,
    });
    storage.apply(&mut response);
    response
}
