//! HTTP utilities shared by the server and the route modules.

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// `cache-control` directive on every successful page response: browsers
/// and intermediaries may reuse it for 120 seconds.
pub const PAGE_CACHE_CONTROL: &str = "max-age=120";

#[must_use]
pub fn page_cache_control() -> HeaderValue {
    HeaderValue::from_static(PAGE_CACHE_CONTROL)
}

/// Build the CORS layer from the configured origins.
///
/// `"*"` allows any origin; an empty list blocks all cross-origin requests.
#[must_use]
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin: AllowOrigin = if origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow any origin - not recommended for production");
        AllowOrigin::any()
    } else if origins.is_empty() {
        tracing::info!("CORS allowed origins not configured - cross-origin requests will be blocked");
        AllowOrigin::list(Vec::<HeaderValue>::new())
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        tracing::info!(origins = ?origins, "CORS allowed origins configured");
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(allow_origin)
}
