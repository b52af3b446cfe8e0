//! Resource cache manager - one region per resource kind.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, trace};

use super::changes::{ChangeChannel, ExpirationChange, ExpirationChanges};
use super::expiry::{ExpirationPolicy, RegionExpiry};
use super::region::Region;
use super::{CacheExpirationOptions, CacheOptions};
use crate::error::{CacheError, Result};
use crate::models::{NamedResource, Resource, ResourceType};

/// In-memory cache of catalog resources, indexed per kind by id and name.
///
/// Regions are created lazily on the first store of a kind. All operations
/// are safe to call concurrently; share the manager behind an `Arc`.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
/// use pokecache::cache::{CacheOptions, ResourceCacheManager};
/// use pokecache::models::Berry;
///
/// let cache = ResourceCacheManager::new(CacheOptions::default());
/// let cheri = Arc::new(Berry { id: 1, name: "cheri".into(), ..Default::default() });
/// cache.store(Arc::clone(&cheri))?;
///
/// let hit = cache.get_by_name::<Berry>("CHERI")?.unwrap();
/// assert!(Arc::ptr_eq(&hit, &cheri));
/// # Ok::<(), pokecache::CacheError>(())
/// ```
pub struct ResourceCacheManager {
    state: RwLock<State>,
    policy: Arc<ExpirationPolicy>,
    /// Serializes policy changes with their publication.
    reconfigure_lock: Mutex<()>,
    changes: ChangeChannel,
}

#[derive(Default)]
struct State {
    disposed: bool,
    regions: HashMap<TypeId, RegionEntry>,
}

/// Type-erased region plus the descriptor of its kind.
struct RegionEntry {
    region: Box<dyn Any + Send + Sync>,
    resource_type: ResourceType,
}

impl State {
    fn region<T: Resource>(&self) -> Option<&Region<T>> {
        self.regions
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.region.downcast_ref::<Region<T>>())
    }
}

impl ResourceCacheManager {
    /// Create an empty manager. No region exists until the first store.
    pub fn new(options: CacheOptions) -> Self {
        info!(
            "Resource cache initialized (default: {:?}, {} per-type override(s))",
            options.default_expiration,
            options.per_type.len()
        );
        Self {
            state: RwLock::new(State::default()),
            policy: Arc::new(ExpirationPolicy::new(&options)),
            reconfigure_lock: Mutex::new(()),
            changes: ChangeChannel::new(),
        }
    }

    fn supported<T: Resource>() -> Result<ResourceType> {
        let resource_type = ResourceType::of::<T>();
        if resource_type.is_supported() {
            Ok(resource_type)
        } else {
            Err(CacheError::UnsupportedType {
                type_name: resource_type.type_name(),
            })
        }
    }

    /// Run `f` against the region of `T`, if one exists.
    fn with_region<T, R>(&self, f: impl FnOnce(&Region<T>) -> R) -> Result<Option<R>>
    where
        T: Resource,
    {
        let state = self.state.read();
        if state.disposed {
            return Err(CacheError::Disposed);
        }
        Ok(state.region::<T>().map(f))
    }

    /// Run `f` against the region of `T`, creating the region first if needed.
    fn with_region_or_create<T, R>(&self, f: impl FnOnce(&Region<T>) -> R) -> Result<R>
    where
        T: Resource,
    {
        let resource_type = Self::supported::<T>()?;

        {
            let state = self.state.read();
            if state.disposed {
                return Err(CacheError::Disposed);
            }
            if let Some(region) = state.region::<T>() {
                return Ok(f(region));
            }
        }

        let mut state = self.state.write();
        if state.disposed {
            return Err(CacheError::Disposed);
        }
        // Another caller may have created it between the two locks.
        if let Some(region) = state.region::<T>() {
            return Ok(f(region));
        }

        debug!("Creating cache region: {}", resource_type);
        let expiry = RegionExpiry::new(resource_type.endpoint(), Arc::clone(&self.policy));
        let region = Region::<T>::new(expiry);
        let out = f(&region);
        state.regions.insert(
            resource_type.type_id(),
            RegionEntry {
                region: Box::new(region),
                resource_type,
            },
        );
        Ok(out)
    }

    /// Store `resource` under its id and, for named kinds, its lower-cased name.
    ///
    /// Overwrites any previous entry with the same key.
    ///
    /// # Errors
    /// [`CacheError::UnsupportedType`] if `T` declares no API endpoint, with
    /// no effect on any region. [`CacheError::Disposed`] after [`dispose`](Self::dispose).
    pub fn store<T: Resource>(&self, resource: Arc<T>) -> Result<()> {
        trace!("Storing {} #{}", T::API_ENDPOINT, resource.id());
        self.with_region_or_create(|region: &Region<T>| region.insert(resource))
    }

    /// Create the region of `T` without storing anything.
    pub fn register<T: Resource>(&self) -> Result<()> {
        self.with_region_or_create(|_: &Region<T>| ())
    }

    /// Look up a live `T` by id.
    ///
    /// Returns `Ok(None)` on any miss, including kinds never stored.
    pub fn get<T: Resource>(&self, id: i32) -> Result<Option<Arc<T>>> {
        let hit = self
            .with_region(|region: &Region<T>| region.get(id))?
            .flatten();
        trace!("Lookup {} #{}: {}", T::API_ENDPOINT, id, hit_or_miss(&hit));
        Ok(hit)
    }

    /// Look up a live `T` by name, ignoring case.
    pub fn get_by_name<T: NamedResource>(&self, name: &str) -> Result<Option<Arc<T>>> {
        let hit = self
            .with_region(|region: &Region<T>| region.get_by_name(name))?
            .flatten();
        trace!("Lookup {} '{}': {}", T::API_ENDPOINT, name, hit_or_miss(&hit));
        Ok(hit)
    }

    /// Whether a live `T` with this id is cached.
    pub fn contains<T: Resource>(&self, id: i32) -> bool {
        matches!(self.with_region(|region: &Region<T>| region.contains(id)), Ok(Some(true)))
    }

    /// Number of live `T` entries.
    pub fn entry_count<T: Resource>(&self) -> u64 {
        self.with_region(|region: &Region<T>| region.entry_count())
            .ok()
            .flatten()
            .unwrap_or(0)
    }

    /// Return the cached `T` with this id, or fetch, store and return it.
    ///
    /// `fetch` only runs on a miss. Its error type must absorb [`CacheError`].
    pub async fn get_or_fetch<T, F, Fut, E>(&self, id: i32, fetch: F) -> Result<Arc<T>, E>
    where
        T: Resource,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<CacheError>,
    {
        Self::supported::<T>()?;
        if let Some(hit) = self.get::<T>(id)? {
            return Ok(hit);
        }

        let resource = Arc::new(fetch().await?);
        self.store(Arc::clone(&resource))?;
        Ok(resource)
    }

    /// Name-keyed counterpart of [`get_or_fetch`](Self::get_or_fetch).
    pub async fn get_or_fetch_by_name<T, F, Fut, E>(&self, name: &str, fetch: F) -> Result<Arc<T>, E>
    where
        T: NamedResource,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<CacheError>,
    {
        Self::supported::<T>()?;
        if let Some(hit) = self.get_by_name::<T>(name)? {
            return Ok(hit);
        }

        let resource = Arc::new(fetch().await?);
        self.store(Arc::clone(&resource))?;
        Ok(resource)
    }

    /// Destroy the region of `T`. No-op if it has none.
    pub fn clear<T: Resource>(&self) {
        let removed = self
            .state
            .write()
            .regions
            .remove(&TypeId::of::<T>())
            .is_some();
        if removed {
            debug!("Removed cache region: {}", ResourceType::of::<T>());
        }
    }

    /// Destroy every region.
    pub fn clear_all(&self) {
        let mut state = self.state.write();
        let count = state.regions.len();
        state.regions.clear();
        debug!("Cleared {} cache region(s)", count);
    }

    /// Kinds that currently have a region, ordered by endpoint.
    pub fn cached_types(&self) -> Vec<ResourceType> {
        let state = self.state.read();
        let mut types: Vec<_> = state
            .regions
            .values()
            .map(|entry| entry.resource_type)
            .collect();
        types.sort_by_key(|t| t.endpoint());
        types
    }

    /// Subscribe to expiration policy changes made from now on.
    ///
    /// The stream ends when the manager is disposed.
    pub fn expiration_options_changes(&self) -> ExpirationChanges {
        self.changes.subscribe()
    }

    /// Options currently applied to `T`.
    pub fn expiration_for<T: Resource>(&self) -> CacheExpirationOptions {
        self.policy.resolve(T::API_ENDPOINT)
    }

    /// Apply a policy change and publish it as one step.
    ///
    /// `apply` returns the change to publish, or `None` if nothing changed.
    fn reconfigure(&self, apply: impl FnOnce() -> Option<ExpirationChange>) -> Result<()> {
        let state = self.state.read();
        if state.disposed {
            return Err(CacheError::Disposed);
        }
        let _guard = self.reconfigure_lock.lock();
        if let Some(change) = apply() {
            self.changes.publish(change);
        }
        Ok(())
    }

    /// Replace the default policy and notify subscribers.
    ///
    /// Applies to entries written, or read under sliding expiration, afterwards.
    pub fn set_default_expiration(&self, options: CacheExpirationOptions) -> Result<()> {
        self.reconfigure(|| {
            self.policy.set_default(options);
            debug!("Default expiration set to {:?}", options);
            Some(ExpirationChange {
                resource: None,
                options,
            })
        })
    }

    /// Override the policy of `T` and notify subscribers.
    pub fn set_expiration<T: Resource>(&self, options: CacheExpirationOptions) -> Result<()> {
        let resource_type = Self::supported::<T>()?;
        self.reconfigure(|| {
            self.policy.set_override(resource_type.endpoint(), options);
            debug!("Expiration for {} set to {:?}", resource_type, options);
            Some(ExpirationChange {
                resource: Some(resource_type),
                options,
            })
        })
    }

    /// Drop the override of `T`, falling back to the default policy.
    ///
    /// Subscribers are notified only if an override existed.
    pub fn reset_expiration<T: Resource>(&self) -> Result<()> {
        let resource_type = Self::supported::<T>()?;
        self.reconfigure(|| {
            if !self.policy.remove_override(resource_type.endpoint()) {
                return None;
            }
            let options = self.policy.default_options();
            debug!("Expiration for {} reset to default {:?}", resource_type, options);
            Some(ExpirationChange {
                resource: Some(resource_type),
                options,
            })
        })
    }

    /// Destroy every region and complete the change stream.
    ///
    /// Idempotent. Afterwards stores, lookups and reconfiguration fail with
    /// [`CacheError::Disposed`].
    pub fn dispose(&self) {
        let mut state = self.state.write();
        if state.disposed {
            return;
        }
        state.disposed = true;
        let count = state.regions.len();
        state.regions.clear();
        self.changes.complete();
        info!("Resource cache disposed ({} region(s) dropped)", count);
    }

    /// Whether [`dispose`](Self::dispose) has run.
    pub fn is_disposed(&self) -> bool {
        self.state.read().disposed
    }
}

fn hit_or_miss<T>(hit: &Option<T>) -> &'static str {
    if hit.is_some() { "hit" } else { "miss" }
}

impl Default for ResourceCacheManager {
    fn default() -> Self {
        Self::new(CacheOptions::default())
    }
}

impl std::fmt::Debug for ResourceCacheManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("ResourceCacheManager")
            .field("disposed", &state.disposed)
            .field("region_count", &state.regions.len())
            .field(
                "cached_types",
                &state
                    .regions
                    .values()
                    .map(|entry| entry.resource_type.endpoint())
                    .collect::<Vec<_>>(),
            )
            .field("default_expiration", &self.policy.default_options())
            .field("subscribers", &self.changes.subscriber_count())
            .finish()
    }
}
