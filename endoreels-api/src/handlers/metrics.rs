use axum::{
    http::{StatusCode, header},
    response::IntoResponse,
};

pub async fn metrics() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        crate::services::metrics::get_metrics(),
    )
}
