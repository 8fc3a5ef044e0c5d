//! Router assembly shared by `main.rs` and the integration tests.

use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Extension, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::pokedex::{self, PokedexLoader};
use crate::rest::{self, ApiDoc};
use crate::service_info::ServiceInfo;

async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Build the application routes with their extensions.
///
/// CORS and request tracing are layered on by the caller.
pub fn router(loader: Arc<PokedexLoader>, info: ServiceInfo, swagger: bool) -> Router {
    let rest_v1 = Router::new().route("/info", get(rest::get_service_info));

    let mut app = Router::new()
        .merge(pokedex::routes::router())
        .nest("/api/v1", rest_v1)
        .route("/health", get(health_check));

    if swagger {
        app = app.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }

    app.layer(Extension(loader)).layer(Extension(info))
}
