//! Item model.

use serde::{Deserialize, Serialize};

use super::NamedApiResource;

/// A bag item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub cost: i32,
    #[serde(default)]
    pub fling_power: Option<i32>,
    #[serde(default)]
    pub category: Option<NamedApiResource>,
}

named_resource!(Item, "item");
