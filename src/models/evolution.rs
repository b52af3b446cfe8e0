//! Evolution chain model.

use serde::{Deserialize, Serialize};

use super::NamedApiResource;

/// An evolution chain. Chains have no name and are addressed by id only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub id: i32,
    #[serde(default)]
    pub baby_trigger_item: Option<NamedApiResource>,
    #[serde(default)]
    pub chain: Option<ChainLink>,
}

/// One step of an evolution chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainLink {
    #[serde(default)]
    pub is_baby: bool,
    pub species: NamedApiResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

id_resource!(EvolutionChain, "evolution-chain");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_chain_from_payload() {
        let payload = r#"{
            "id": 1,
            "baby_trigger_item": null,
            "chain": {
                "is_baby": false,
                "species": {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon-species/1/"},
                "evolves_to": [{
                    "is_baby": false,
                    "species": {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon-species/2/"},
                    "evolves_to": []
                }]
            }
        }"#;

        let chain: EvolutionChain = serde_json::from_str(payload).unwrap();
        let root = chain.chain.unwrap();

        assert_eq!(root.species.name, "bulbasaur");
        assert_eq!(root.evolves_to[0].species.name, "ivysaur");
    }
}
