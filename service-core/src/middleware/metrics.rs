use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};
use std::time::Instant;

/// Records `http_requests_total` and `http_request_duration_seconds`.
///
/// The path label uses the matched route template so unknown paths collapse
/// into a single `unmatched` series.
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status().as_u16().to_string();

    let labels = [("method", method), ("path", path), ("status", status)];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, middleware::from_fn, routing::get};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use tower::ServiceExt;

    async fn send(app: Router, uri: &str) -> StatusCode {
        app.oneshot(
            axum::http::Request::builder()
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
    }

    #[test]
    fn records_matched_route_and_unmatched_requests() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        let app = Router::new()
            .route("/health", get(|| async { "ok" }))
            .layer(from_fn(metrics_middleware));

        metrics::with_local_recorder(&recorder, || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async {
                assert_eq!(send(app.clone(), "/health").await, StatusCode::OK);
                assert_eq!(send(app, "/missing").await, StatusCode::NOT_FOUND);
            });
        });

        let rendered = handle.render();
        assert!(
            rendered
                .contains(r#"http_requests_total{method="GET",path="/health",status="200"} 1"#),
            "{rendered}"
        );
        assert!(
            rendered.contains(
                r#"http_requests_total{method="GET",path="unmatched",status="404"} 1"#
            ),
            "{rendered}"
        );
        assert!(rendered.contains("http_request_duration_seconds"), "{rendered}");
    }
}
