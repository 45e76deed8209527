//! Cross-origin policy construction.
//!
//! Browsers refuse `Access-Control-Allow-Origin: *` together with
//! `Access-Control-Allow-Credentials: true`, so the "allow everything" policy
//! echoes the request's origin, method list and header list instead of
//! sending wildcards.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Origin entry that selects the allow-everything policy.
pub const WILDCARD_ORIGIN: &str = "*";

/// Allows any origin, method and header, with credentials.
///
/// Not suitable for production: restrict origins with [`restricted_cors`].
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Allows only the listed origins; methods, headers and credentials as in [`permissive_cors`].
pub fn restricted_cors(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Picks the policy for a configured origin list.
///
/// An empty list or one containing `*` yields [`permissive_cors`]. Entries
/// that are not valid header values are logged and skipped.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == WILDCARD_ORIGIN) {
        tracing::warn!("CORS allows any origin with credentials; restrict origins for production");
        return permissive_cors();
    }

    let origins = allowed_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Invalid CORS origin '{}': {}. Skipping.", o, e);
                None
            }
        })
        .collect();

    restricted_cors(origins)
}
