//! Versioned API surface. Only the placeholder route exists so far.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct TestResponse {
    #[schema(value_type = String, example = "Test endpoint working")]
    pub message: &'static str,
    #[schema(value_type = String, example = "success")]
    pub status: &'static str,
}

#[utoipa::path(
    get,
    path = "/api/v1/test",
    responses(
        (status = 200, description = "Routing works", body = TestResponse)
    ),
    tag = "V1"
)]
pub async fn test_endpoint() -> Json<TestResponse> {
    Json(TestResponse {
        message: "Test endpoint working",
        status: "success",
    })
}
