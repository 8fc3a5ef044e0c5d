//! axum handlers for the Pokédex page routes.

use std::sync::Arc;

use axum::{
    extract::{Extension, FromRequestParts, Path, Query},
    http::{header::CACHE_CONTROL, request::Parts},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::loader::{DetailPage, ListPage, LoadError, PokedexLoader};
use crate::http::page_cache_control;
use crate::pokemon::{type_icons, TypeIcon};
use crate::rest::ProblemDetails;

/// Query string of the list route.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Index of the first Pokémon on the page (default `0`).
    pub offset: Option<String>,
}

/// `Query<ListQuery>` whose rejection is a `ProblemDetails` body.
pub struct PageQuery(pub ListQuery);

impl<S: Send + Sync> FromRequestParts<S> for PageQuery {
    type Rejection = ProblemDetails;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<ListQuery>::from_request_parts(parts, state).await {
            Ok(Query(query)) => Ok(Self(query)),
            Err(rejection) => {
                tracing::debug!(%rejection, "rejected query string");
                Err(ProblemDetails::bad_request("Malformed query string"))
            }
        }
    }
}

/// Single `Path` segment whose rejection is a `ProblemDetails` body.
pub struct Segment(pub String);

impl<S: Send + Sync> FromRequestParts<S> for Segment {
    type Rejection = ProblemDetails;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(%rejection, "rejected path segment");
                Err(ProblemDetails::bad_request("Malformed path parameter"))
            }
        }
    }
}

impl From<LoadError> for ProblemDetails {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::InvalidInput(msg) => Self::bad_request(msg),
            LoadError::NotFound(msg) => Self::not_found(msg),
            LoadError::UpstreamTimeout => {
                tracing::warn!("backend request timed out");
                Self::gateway_timeout("The Pokémon service did not respond in time")
            }
            LoadError::Upstream(e) => {
                tracing::error!(error = %e, "backend request failed");
                Self::internal_error("Failed to load Pokémon data")
            }
        }
    }
}

/// Routes served by this module. Expects an `Extension<Arc<PokedexLoader>>`.
pub fn router() -> Router {
    Router::new()
        .route("/pokedex", get(list_pokemon))
        .route("/pokedex/{id}", get(pokemon_detail))
        .route("/pokemon/{name}", get(pokemon_by_name))
        .route("/types", get(list_types))
}

/// List one page of Pokémon
///
/// # Errors
///
/// Returns `ProblemDetails` for invalid offsets, empty pages and backend failures.
#[utoipa::path(
    get,
    path = "/pokedex",
    tag = "Pokedex",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of Pokémon summaries", body = ListPage),
        (status = 400, description = "Offset is not a non-negative integer", body = ProblemDetails),
        (status = 404, description = "No Pokémon on this page", body = ProblemDetails),
        (status = 504, description = "Backend timed out", body = ProblemDetails)
    )
)]
pub async fn list_pokemon(
    Extension(loader): Extension<Arc<PokedexLoader>>,
    PageQuery(query): PageQuery,
) -> Result<impl IntoResponse, ProblemDetails> {
    let page = loader.load_list(query.offset.as_deref()).await?;
    Ok(([(CACHE_CONTROL, page_cache_control())], Json(page)))
}

/// Get one Pokémon in detail
///
/// # Errors
///
/// Returns `ProblemDetails` for invalid ids, missing records and backend failures.
#[utoipa::path(
    get,
    path = "/pokedex/{id}",
    tag = "Pokedex",
    params(("id" = String, Path, description = "Pokémon id")),
    responses(
        (status = 200, description = "Detailed Pokémon record", body = DetailPage),
        (status = 400, description = "Id is not a non-negative integer", body = ProblemDetails),
        (status = 404, description = "No such Pokémon", body = ProblemDetails),
        (status = 504, description = "Backend timed out", body = ProblemDetails)
    )
)]
pub async fn pokemon_detail(
    Extension(loader): Extension<Arc<PokedexLoader>>,
    Segment(id): Segment,
) -> Result<impl IntoResponse, ProblemDetails> {
    let page = loader.load_detail(&id).await?;
    Ok(([(CACHE_CONTROL, page_cache_control())], Json(page)))
}

/// Look up one Pokémon by name (legacy)
///
/// # Errors
///
/// Returns `ProblemDetails` for blank names, unknown Pokémon and backend failures.
#[utoipa::path(
    get,
    path = "/pokemon/{name}",
    tag = "Pokedex",
    params(("name" = String, Path, description = "Pokémon name")),
    responses(
        (status = 200, description = "Single-entry page", body = ListPage),
        (status = 400, description = "Name is blank or malformed", body = ProblemDetails),
        (status = 404, description = "No such Pokémon", body = ProblemDetails)
    )
)]
pub async fn pokemon_by_name(
    Extension(loader): Extension<Arc<PokedexLoader>>,
    Segment(name): Segment,
) -> Result<impl IntoResponse, ProblemDetails> {
    let page = loader.load_by_name(&name).await?;
    Ok(([(CACHE_CONTROL, page_cache_control())], Json(page)))
}

/// List the type catalog
#[utoipa::path(
    get,
    path = "/types",
    tag = "Pokedex",
    responses((status = 200, description = "All 18 types with icon references", body = [TypeIcon]))
)]
#[allow(clippy::unused_async)] // Required for Axum handler signature
pub async fn list_types() -> Json<Vec<TypeIcon>> {
    Json(type_icons())
}
