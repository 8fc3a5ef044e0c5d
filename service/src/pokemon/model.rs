//! Record shapes returned by the backend and forwarded to the rendering layer.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::catalog::PokemonType;

/// List-view projection of a Pokémon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PokemonSummary {
    pub id: u32,
    pub name: String,
    pub weight: u32,
    pub height: u32,
    pub sprite_url: String,
    pub types: Vec<PokemonType>,
}

/// Detail-view record, including stats and the evolution chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PokemonDetailed {
    pub id: u32,
    pub name: String,
    pub weight: u32,
    pub height: u32,
    pub sprite_url: String,
    pub types: Vec<PokemonType>,
    pub stats: Vec<PokemonStat>,
    pub evolution_chain: Vec<EvolutionEdge>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StatName {
    Attack,
    Defense,
    Hp,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PokemonStat {
    pub stat_name: StatName,
    pub effort: u32,
    pub base_stat: u32,
}

/// One evolution relationship: `pokemon_*` evolves into `evolves_to_*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EvolutionEdge {
    pub pokemon_id: u32,
    pub pokemon_name: String,
    pub evolves_to_id: u32,
    pub evolves_to_name: String,
    pub min_level: u32,
    pub trigger_name: String,
}
