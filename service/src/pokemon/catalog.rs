//! The closed catalog of elemental types and their icon references.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Path prefix under which the rendering layer serves type icons.
pub const ICON_PREFIX: &str = "/icons/pokemon-types";

/// One of the 18 elemental types.
///
/// Serialized as its lowercase key (`"fire"`, `"water"`, ...). Any other key
/// fails deserialization, so a backend record carrying an unknown type is
/// rejected as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PokemonType {
    Bug,
    Dark,
    Dragon,
    Electric,
    Fairy,
    Fighting,
    Fire,
    Flying,
    Ghost,
    Grass,
    Ground,
    Ice,
    Normal,
    Poison,
    Psychic,
    Rock,
    Steel,
    Water,
}

impl PokemonType {
    /// Every type, in catalog (alphabetical) order.
    pub const ALL: [Self; 18] = [
        Self::Bug,
        Self::Dark,
        Self::Dragon,
        Self::Electric,
        Self::Fairy,
        Self::Fighting,
        Self::Fire,
        Self::Flying,
        Self::Ghost,
        Self::Grass,
        Self::Ground,
        Self::Ice,
        Self::Normal,
        Self::Poison,
        Self::Psychic,
        Self::Rock,
        Self::Steel,
        Self::Water,
    ];

    /// The wire key for this type.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::Dark => "dark",
            Self::Dragon => "dragon",
            Self::Electric => "electric",
            Self::Fairy => "fairy",
            Self::Fighting => "fighting",
            Self::Fire => "fire",
            Self::Flying => "flying",
            Self::Ghost => "ghost",
            Self::Grass => "grass",
            Self::Ground => "ground",
            Self::Ice => "ice",
            Self::Normal => "normal",
            Self::Poison => "poison",
            Self::Psychic => "psychic",
            Self::Rock => "rock",
            Self::Steel => "steel",
            Self::Water => "water",
        }
    }

    /// Icon asset reference, e.g. `/icons/pokemon-types/fire.svg`.
    #[must_use]
    pub fn icon(self) -> String {
        format!("{ICON_PREFIX}/{}.svg", self.key())
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string is not one of the 18 type keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pokemon type: {0}")]
pub struct UnknownType(pub String);

impl FromStr for PokemonType {
    type Err = UnknownType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.key() == s)
            .ok_or_else(|| UnknownType(s.to_string()))
    }
}

/// A catalog entry as served to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TypeIcon {
    #[serde(rename = "type")]
    pub pokemon_type: PokemonType,
    pub icon: String,
}

/// The full catalog, in catalog order.
#[must_use]
pub fn type_icons() -> Vec<TypeIcon> {
    PokemonType::ALL
        .into_iter()
        .map(|pokemon_type| TypeIcon {
            pokemon_type,
            icon: pokemon_type.icon(),
        })
        .collect()
}
