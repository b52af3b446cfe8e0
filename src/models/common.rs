//! Shared reference types embedded in resource payloads.

use serde::{Deserialize, Serialize};

/// Link to another resource that has a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedApiResource {
    pub name: String,
    pub url: String,
}

/// Link to another resource addressed by URL only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResource {
    pub url: String,
}
