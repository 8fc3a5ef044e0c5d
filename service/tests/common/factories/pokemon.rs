//! Builders for backend JSON payloads.

use super::next_id;
use serde_json::{json, Value};

/// Builder for a `PokemonSummary` JSON object with sensible defaults.
pub struct SummaryFactory {
    id: Option<u64>,
    name: Option<String>,
    types: Vec<String>,
}

impl SummaryFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: None,
            name: None,
            types: vec!["grass".into(), "poison".into()],
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    #[must_use]
    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| (*t).to_string()).collect();
        self
    }

    pub fn json(self) -> Value {
        let id = self.id.unwrap_or_else(next_id);
        let name = self.name.unwrap_or_else(|| format!("pokemon-{id}"));
        json!({
            "id": id,
            "name": name,
            "weight": 69,
            "height": 7,
            "sprite_url": format!("https://img.example/sprites/{id}.png"),
            "types": self.types,
        })
    }
}

impl Default for SummaryFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a `PokemonDetailed` JSON object with stats and one evolution edge.
pub struct DetailedFactory {
    id: Option<u64>,
    stat_name: String,
}

impl DetailedFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: None,
            stat_name: "hp".into(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Override the first stat's name (e.g. to produce an invalid payload).
    #[must_use]
    pub fn with_stat_name(mut self, stat_name: &str) -> Self {
        self.stat_name = stat_name.to_string();
        self
    }

    pub fn json(self) -> Value {
        let id = self.id.unwrap_or_else(next_id);
        json!({
            "id": id,
            "name": "bulbasaur",
            "weight": 69,
            "height": 7,
            "sprite_url": format!("https://img.example/sprites/{id}.png"),
            "types": ["grass", "poison"],
            "stats": [
                {"stat_name": self.stat_name, "effort": 0, "base_stat": 45},
                {"stat_name": "attack", "effort": 0, "base_stat": 49},
                {"stat_name": "defense", "effort": 0, "base_stat": 49},
                {"stat_name": "special-attack", "effort": 1, "base_stat": 65},
                {"stat_name": "special-defense", "effort": 0, "base_stat": 65},
                {"stat_name": "speed", "effort": 0, "base_stat": 45}
            ],
            "evolution_chain": [
                {
                    "pokemon_id": 1,
                    "pokemon_name": "bulbasaur",
                    "evolves_to_id": 2,
                    "evolves_to_name": "ivysaur",
                    "min_level": 16,
                    "trigger_name": "level-up"
                },
                {
                    "pokemon_id": 2,
                    "pokemon_name": "ivysaur",
                    "evolves_to_id": 3,
                    "evolves_to_name": "venusaur",
                    "min_level": 32,
                    "trigger_name": "level-up"
                }
            ]
        })
    }
}

impl Default for DetailedFactory {
    fn default() -> Self {
        Self::new()
    }
}
