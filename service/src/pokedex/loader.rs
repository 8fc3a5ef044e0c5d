use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::backend::{PokemonApiClient, PokemonApiError};
use crate::pokemon::{PokemonDetailed, PokemonSummary};

/// Offset used when the list route gets no `offset` parameter.
pub const DEFAULT_OFFSET: &str = "0";

/// Page data for the list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListPage {
    pub pokemon: Vec<PokemonSummary>,
}

/// Page data for the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DetailPage {
    pub pokemon: PokemonDetailed,
}

/// Why a page could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Unparseable or negative parameter (400)
    #[error("{0}")]
    InvalidInput(&'static str),

    /// Empty list or null record (404)
    #[error("{0}")]
    NotFound(&'static str),

    /// Backend did not answer before the deadline (504)
    #[error("backend did not respond in time")]
    UpstreamTimeout,

    /// Any other backend failure (500)
    #[error("backend request failed: {0}")]
    Upstream(#[source] PokemonApiError),
}

impl From<PokemonApiError> for LoadError {
    fn from(err: PokemonApiError) -> Self {
        match err {
            PokemonApiError::Timeout => Self::UpstreamTimeout,
            other => Self::Upstream(other),
        }
    }
}

/// The numeric parameters the loaders accept, with their error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericParam {
    Offset,
    Id,
}

impl NumericParam {
    const fn not_a_number(self) -> &'static str {
        match self {
            Self::Offset => "Offset must be a valid number",
            Self::Id => "ID must be a valid number",
        }
    }

    const fn negative(self) -> &'static str {
        match self {
            Self::Offset => "Offset must not be negative",
            Self::Id => "ID must not be negative",
        }
    }
}

/// Parse a non-negative integer parameter.
///
/// Surrounding whitespace is ignored. The rest must be an optional sign
/// followed by ASCII digits; prefixes such as `"12abc"`, decimals and
/// exponents are rejected rather than truncated. Any negative integer is
/// reported as negative, whatever its magnitude, and `"-0"` is zero.
/// Non-negative values too large for `u64` saturate to `u64::MAX`: they are
/// valid input that simply matches no record upstream.
///
/// # Errors
/// Returns [`LoadError::InvalidInput`] with the parameter's message.
pub fn parse_non_negative(raw: &str, param: NumericParam) -> Result<u64, LoadError> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LoadError::InvalidInput(param.not_a_number()));
    }

    if negative && digits.bytes().any(|b| b != b'0') {
        return Err(LoadError::InvalidInput(param.negative()));
    }

    Ok(digits.parse().unwrap_or(u64::MAX))
}

/// Loads page data for the Pokédex views from the backend.
///
/// Stateless apart from the shared client; every call performs exactly one
/// backend request (or none, when validation fails).
#[derive(Clone)]
pub struct PokedexLoader {
    client: Arc<dyn PokemonApiClient>,
}

impl PokedexLoader {
    pub fn new(client: Arc<dyn PokemonApiClient>) -> Self {
        Self { client }
    }

    /// Load one page of summaries starting at `offset` (default `"0"`).
    ///
    /// # Errors
    /// `InvalidInput` for a bad offset, `NotFound` for an empty page, and an
    /// upstream variant if the backend call fails.
    pub async fn load_list(&self, offset: Option<&str>) -> Result<ListPage, LoadError> {
        let offset = parse_non_negative(offset.unwrap_or(DEFAULT_OFFSET), NumericParam::Offset)?;

        let pokemon = self.client.list_pokemons(offset).await?;
        tracing::debug!(offset, count = pokemon.len(), ?pokemon, "fetched pokemon page");

        if pokemon.is_empty() {
            return Err(LoadError::NotFound("No pokemons found"));
        }

        Ok(ListPage { pokemon })
    }

    /// Load the detailed record for `id`.
    ///
    /// # Errors
    /// `InvalidInput` for a bad id, `NotFound` when the backend returns
    /// `null`, and an upstream variant if the backend call fails.
    pub async fn load_detail(&self, id: &str) -> Result<DetailPage, LoadError> {
        let id = parse_non_negative(id, NumericParam::Id)?;

        let pokemon = self
            .client
            .get_pokemon_detailed(id)
            .await?
            .ok_or(LoadError::NotFound("No pokemon found"))?;
        tracing::debug!(id, ?pokemon, "fetched pokemon detail");

        Ok(DetailPage { pokemon })
    }

    /// Legacy lookup by name, wrapped in a one-element list page.
    ///
    /// # Errors
    /// `InvalidInput` for a blank name, `NotFound` when the backend has no
    /// such Pokémon, and an upstream variant for other failures.
    pub async fn load_by_name(&self, name: &str) -> Result<ListPage, LoadError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LoadError::InvalidInput("Name is required"));
        }

        let pokemon = match self.client.get_pokemon(name).await {
            Ok(p) => p,
            Err(PokemonApiError::NotFound(_)) => {
                return Err(LoadError::NotFound("No pokemon found"))
            }
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(name, ?pokemon, "fetched pokemon by name");

        Ok(ListPage {
            pokemon: vec![pokemon],
        })
    }
}
