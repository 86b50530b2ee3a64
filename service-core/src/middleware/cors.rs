use tower_http::cors::{Any, CorsLayer};

/// CORS policy that accepts any origin, method and header.
///
/// Browsers will not send credentials under a wildcard origin, so
/// `allow_credentials` stays off.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
