//! Pokecache - typed in-memory cache for PokeAPI resources.
//!
//! Avoids redundant catalog fetches by keeping retrieved resources in memory,
//! one region per resource kind, addressable by id and case-insensitive name.
//!
//! ## Architecture
//!
//! - `cache` - Resource cache manager, regions, expiration policy, change stream
//! - `models` - Resource traits and the concrete catalog kinds
//! - `config` - Environment configuration
//! - `error` - Error types
//! - `utils` - Utility functions

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

pub use cache::{CacheExpirationOptions, CacheOptions, ResourceCacheManager};
pub use error::{CacheError, Result};
