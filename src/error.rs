//! Error types for the resource cache.

use thiserror::Error;

/// Errors raised by [`ResourceCacheManager`](crate::cache::ResourceCacheManager).
///
/// Lookup misses are not errors; they surface as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// The resource kind has no API endpoint and cannot be cached.
    #[error("resource type `{type_name}` is not cacheable: it declares no API endpoint")]
    UnsupportedType { type_name: &'static str },

    /// The manager was disposed and no longer accepts operations.
    #[error("resource cache manager has been disposed")]
    Disposed,
}

/// Result alias defaulting to [`CacheError`].
pub type Result<T, E = CacheError> = std::result::Result<T, E>;
