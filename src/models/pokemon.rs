//! Pokémon and species models.

use serde::{Deserialize, Serialize};

use super::NamedApiResource;

/// A Pokémon form as it appears in battle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub base_experience: Option<i32>,
    /// Height in decimetres.
    #[serde(default)]
    pub height: i32,
    /// Weight in hectograms.
    #[serde(default)]
    pub weight: i32,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub species: Option<NamedApiResource>,
}

/// The species a set of Pokémon forms belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub capture_rate: i32,
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub is_mythical: bool,
}

named_resource!(Pokemon, "pokemon");
named_resource!(PokemonSpecies, "pokemon-species");
