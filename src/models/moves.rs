//! Move model.

use serde::{Deserialize, Serialize};

use super::NamedApiResource;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub accuracy: Option<i32>,
    #[serde(default)]
    pub power: Option<i32>,
    #[serde(default)]
    pub pp: Option<i32>,
    #[serde(default)]
    pub priority: i32,
    #[serde(rename = "type", default)]
    pub move_type: Option<NamedApiResource>,
}

named_resource!(Move, "move");
