//! Resource models exports.
//!
//! Every cacheable kind implements [`Resource`]; kinds addressable by name
//! additionally implement [`NamedResource`].

/// Implements [`Resource`] and [`NamedResource`] for a kind with `id` and `name` fields.
macro_rules! named_resource {
    ($ty:ty, $endpoint:literal) => {
        impl $crate::models::Resource for $ty {
            const API_ENDPOINT: &'static str = $endpoint;
            const KEYS: $crate::models::KeyShape = $crate::models::KeyShape::IdAndName;

            fn id(&self) -> i32 {
                self.id
            }

            fn name(&self) -> Option<&str> {
                Some(&self.name)
            }
        }

        impl $crate::models::NamedResource for $ty {}
    };
}

/// Implements [`Resource`] for a kind addressable only by `id`.
macro_rules! id_resource {
    ($ty:ty, $endpoint:literal) => {
        impl $crate::models::Resource for $ty {
            const API_ENDPOINT: &'static str = $endpoint;
            const KEYS: $crate::models::KeyShape = $crate::models::KeyShape::Id;

            fn id(&self) -> i32 {
                self.id
            }
        }
    };
}

pub mod berry;
pub mod common;
pub mod evolution;
pub mod item;
pub mod machine;
pub mod moves;
pub mod pokedex;
pub mod pokemon;
pub mod resource;

pub use berry::Berry;
pub use common::{ApiResource, NamedApiResource};
pub use evolution::EvolutionChain;
pub use item::Item;
pub use machine::Machine;
pub use moves::Move;
pub use pokedex::Pokedex;
pub use pokemon::{Pokemon, PokemonSpecies};
pub use resource::{KeyShape, NamedResource, Resource, ResourceType};
