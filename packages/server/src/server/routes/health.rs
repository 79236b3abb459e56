use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AppState;
use crate::server::view_request::ViewRequest;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    prefix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    hostname: Option<String>,
    pjax: bool,
}

/// Health check endpoint
///
/// Reports the mount prefix and the view context resolved for this request,
/// which makes proxy header setups easy to verify.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
    view: ViewRequest,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        prefix: state.links.prefix().to_string(),
        hostname: view.hostname,
        pjax: view.pjax,
    })
}
