//! Pokedex model.

use serde::{Deserialize, Serialize};

use super::NamedApiResource;

/// A regional or national index of Pokémon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pokedex {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub is_main_series: bool,
    #[serde(default)]
    pub region: Option<NamedApiResource>,
    #[serde(default)]
    pub version_groups: Vec<NamedApiResource>,
}

named_resource!(Pokedex, "pokedex");
