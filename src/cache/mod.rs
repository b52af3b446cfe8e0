//! Cache module - typed resource cache built on Moka.
//!
//! ## Architecture
//!
//! - `ResourceCacheManager` - owns one region per resource kind, created lazily
//! - `Region` - id cache plus lower-cased name index for one kind
//! - `ExpirationPolicy` - default and per-kind expiration, changeable at runtime
//! - `ExpirationChanges` - subscription to policy changes, completed on dispose
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use pokecache::cache::{CacheOptions, ResourceCacheManager};
//! use pokecache::models::Pokedex;
//!
//! let cache = ResourceCacheManager::new(CacheOptions::default());
//! cache.store(Arc::new(Pokedex { id: 1, name: "national".into(), ..Default::default() }))?;
//! assert!(cache.get::<Pokedex>(1)?.is_some());
//! # Ok::<(), pokecache::CacheError>(())
//! ```

mod changes;
mod config;
mod expiry;
mod manager;
mod region;

pub use changes::{ExpirationChange, ExpirationChanges};
pub use config::{CacheExpirationOptions, CacheOptions};
pub use manager::ResourceCacheManager;
