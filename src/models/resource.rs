//! Resource capability traits and the type descriptor used to index regions.

use std::any::{type_name, TypeId};
use std::fmt;

/// Which keys a resource kind can be looked up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyShape {
    /// Numeric id only.
    Id,
    /// Numeric id and case-insensitive name.
    IdAndName,
}

/// A resource fetched from the catalog API.
///
/// `API_ENDPOINT` is the routing key of the kind (`"berry"`, `"pokemon"`, ...).
/// An empty endpoint marks the kind as not cacheable.
pub trait Resource: Send + Sync + 'static {
    const API_ENDPOINT: &'static str;
    const KEYS: KeyShape;

    /// Numeric identifier of this instance.
    fn id(&self) -> i32;

    /// Name of this instance, for kinds that expose one.
    fn name(&self) -> Option<&str> {
        None
    }
}

/// Marker for kinds that can be looked up by name.
pub trait NamedResource: Resource {}

/// Stable identifier of a resource kind, with its static metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceType {
    type_id: TypeId,
    endpoint: &'static str,
    type_name: &'static str,
    keys: KeyShape,
}

impl ResourceType {
    /// Descriptor of `T`.
    pub fn of<T: Resource>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            endpoint: T::API_ENDPOINT,
            type_name: type_name::<T>(),
            keys: T::KEYS,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// API endpoint of the kind, also used as its configuration key.
    pub fn endpoint(&self) -> &'static str {
        self.endpoint
    }

    /// Fully qualified Rust type name.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn keys(&self) -> KeyShape {
        self.keys
    }

    /// Whether the kind may be stored at all.
    pub fn is_supported(&self) -> bool {
        !self.endpoint.is_empty()
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_supported() {
            f.write_str(self.endpoint)
        } else {
            f.write_str(self.type_name)
        }
    }
}
