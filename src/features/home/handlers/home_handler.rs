use axum::Json;

use crate::shared::types::ApiResponse;

/// Check the API connectivity
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting message", body = ApiResponse<String>)
    ),
    tag = "home"
)]
pub async fn get_hello() -> Json<ApiResponse<String>> {
    Json(ApiResponse::success(
        "successfully get message",
        "Hello, World".to_string(),
    ))
}

/// Liveness probe; no dependencies are checked
pub async fn health_check() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}
