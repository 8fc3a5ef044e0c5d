//! Error bodies and `OpenAPI` documentation for the HTTP surface.

// The OpenApi derive macro generates code that triggers this lint
#![allow(clippy::needless_for_each)]

use crate::pokedex::{self, DetailPage, ListPage};
use crate::pokemon::{
    EvolutionEdge, PokemonDetailed, PokemonStat, PokemonSummary, PokemonType, StatName, TypeIcon,
};
use crate::service_info::{BackendInfo, ServiceInfo};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde::{Serialize, Serializer};
use utoipa::{OpenApi, ToSchema};

/// Serialize a `StatusCode` as its `u16` representation.
#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires `&T` signature
fn serialize_status_code<S: Serializer>(status: &StatusCode, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u16(status.as_u16())
}

/// RFC 7807 Problem Details error response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetails {
    /// URI reference identifying the problem type
    #[serde(rename = "type")]
    pub problem_type: String,
    /// Short human-readable summary
    pub title: String,
    /// HTTP status code
    #[serde(serialize_with = "serialize_status_code")]
    #[schema(value_type = u16)]
    pub status: StatusCode,
    /// Human-readable explanation specific to this occurrence
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<ProblemExtensions>,
}

/// Machine-readable error code.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProblemExtensions {
    pub code: String,
}

impl ProblemDetails {
    fn new(status: StatusCode, slug: &str, code: &str, detail: &str) -> Self {
        Self {
            problem_type: format!("/errors/{slug}"),
            title: status.canonical_reason().unwrap_or("Error").to_string(),
            status,
            detail: detail.to_string(),
            extensions: Some(ProblemExtensions {
                code: code.to_string(),
            }),
        }
    }

    /// 400: a route or query parameter failed validation.
    #[must_use]
    pub fn bad_request(detail: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "invalid-input", "INVALID_INPUT", detail)
    }

    /// 404: the backend had nothing to show.
    #[must_use]
    pub fn not_found(detail: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, "not-found", "NOT_FOUND", detail)
    }

    /// 504: the backend did not answer in time.
    #[must_use]
    pub fn gateway_timeout(detail: &str) -> Self {
        Self::new(
            StatusCode::GATEWAY_TIMEOUT,
            "upstream-timeout",
            "UPSTREAM_TIMEOUT",
            detail,
        )
    }

    /// 500: anything else.
    #[must_use]
    pub fn internal_error(detail: &str) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal",
            "INTERNAL_ERROR",
            detail,
        )
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}

/// `OpenAPI` documentation for the HTTP API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "PokeAtlas page data",
        version = "1.0.0",
        description = "Page data for the Pokédex list and detail views",
        license(name = "MIT")
    ),
    paths(
        pokedex::routes::list_pokemon,
        pokedex::routes::pokemon_detail,
        pokedex::routes::pokemon_by_name,
        pokedex::routes::list_types,
        get_service_info
    ),
    components(schemas(
        ServiceInfo,
        BackendInfo,
        ProblemDetails,
        ProblemExtensions,
        ListPage,
        DetailPage,
        PokemonSummary,
        PokemonDetailed,
        PokemonStat,
        StatName,
        EvolutionEdge,
        PokemonType,
        TypeIcon
    ))
)]
pub struct ApiDoc;

/// Describe the running service
///
/// Version and build stamp, plus the backend address in effect and whether it
/// was fixed at build time or configured.
#[utoipa::path(
    get,
    path = "/api/v1/info",
    tag = "System",
    responses((status = 200, description = "Service description", body = ServiceInfo))
)]
#[allow(clippy::unused_async)] // Required for Axum handler signature
pub async fn get_service_info(Extension(info): Extension<ServiceInfo>) -> Json<ServiceInfo> {
    Json(info)
}
