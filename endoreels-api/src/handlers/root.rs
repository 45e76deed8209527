use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(value_type = String, example = "EndoReels API is running!")]
    pub message: &'static str,
}

/// Landing route confirming the API process is up.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API is running", body = MessageResponse)
    ),
    tag = "Observability"
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "EndoReels API is running!",
    })
}
