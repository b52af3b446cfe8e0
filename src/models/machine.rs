//! Machine (TM/HM) model.

use serde::{Deserialize, Serialize};

use super::NamedApiResource;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    pub id: i32,
    #[serde(default)]
    pub item: Option<NamedApiResource>,
    #[serde(rename = "move", default)]
    pub teaches: Option<NamedApiResource>,
    #[serde(default)]
    pub version_group: Option<NamedApiResource>,
}

id_resource!(Machine, "machine");
