//! Berry model.

use serde::{Deserialize, Serialize};

use super::NamedApiResource;

/// A berry, a small fruit that can restore HP or status when held.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Berry {
    pub id: i32,
    pub name: String,
    /// Hours until the tree grows to the next stage.
    #[serde(default)]
    pub growth_time: i32,
    #[serde(default)]
    pub max_harvest: i32,
    #[serde(default)]
    pub size: i32,
    #[serde(default)]
    pub smoothness: i32,
    #[serde(default)]
    pub firmness: Option<NamedApiResource>,
    #[serde(default)]
    pub item: Option<NamedApiResource>,
}

named_resource!(Berry, "berry");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Resource;

    #[test]
    fn test_berry_from_payload() {
        let payload = r#"{
            "id": 1,
            "name": "cheri",
            "growth_time": 3,
            "max_harvest": 5,
            "size": 20,
            "smoothness": 25,
            "firmness": {"name": "soft", "url": "https://pokeapi.co/api/v2/berry-firmness/2/"},
            "natural_gift_power": 60
        }"#;

        let berry: Berry = serde_json::from_str(payload).unwrap();

        assert_eq!(berry.id(), 1);
        assert_eq!(berry.name(), Some("cheri"));
        assert_eq!(berry.firmness.unwrap().name, "soft");
        assert!(berry.item.is_none());
    }
}
