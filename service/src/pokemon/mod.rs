//! Pokémon domain types: the type catalog and the list/detail records.

mod catalog;
mod model;

pub use catalog::{type_icons, PokemonType, TypeIcon, UnknownType, ICON_PREFIX};
pub use model::{EvolutionEdge, PokemonDetailed, PokemonStat, PokemonSummary, StatName};
