pub mod config;
pub mod handlers;
pub mod services;
pub mod startup;

use utoipa::OpenApi;

/// Path of the generated OpenAPI document; Swagger UI is served at `/docs`.
pub const OPENAPI_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "EndoReels API", version = "1.0.0"),
    paths(
        handlers::root::root,
        handlers::health::health_check,
        handlers::v1::test_endpoint,
    ),
    components(
        schemas(
            handlers::root::MessageResponse,
            handlers::health::HealthResponse,
            handlers::v1::TestResponse,
        )
    ),
    tags(
        (name = "Observability", description = "Service liveness"),
        (name = "V1", description = "Versioned API endpoints"),
    )
)]
pub struct ApiDoc;
