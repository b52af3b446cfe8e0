//! Per-kind storage: an id cache plus a lower-cased name index.

use std::sync::Arc;

use dashmap::DashMap;
use moka::notification::RemovalCause;
use moka::sync::Cache;

use super::expiry::RegionExpiry;
use crate::models::{KeyShape, Resource};

/// Storage for one resource kind.
///
/// The id cache owns the instances and their expiration. The name index
/// maps lower-cased names to the instance indexed under them; an index entry
/// is dropped when that exact instance leaves the id cache, and a name only
/// resolves while its instance is still live there.
pub(crate) struct Region<T: Resource> {
    by_id: Cache<i32, Arc<T>>,
    by_name: Arc<DashMap<String, Arc<T>>>,
}

impl<T: Resource> Region<T> {
    pub(crate) fn new(expiry: RegionExpiry) -> Self {
        let by_name = Arc::new(DashMap::new());
        let mut builder = Cache::builder().expire_after(expiry);

        if T::KEYS == KeyShape::IdAndName {
            let names = Arc::clone(&by_name);
            builder = builder.eviction_listener(
                move |_id: Arc<i32>, resource: Arc<T>, _cause: RemovalCause| {
                    unindex(&names, &resource);
                },
            );
        }

        Self {
            by_id: builder.build(),
            by_name,
        }
    }

    /// Insert or overwrite `resource` under its id and, if named, its name.
    pub(crate) fn insert(&self, resource: Arc<T>) {
        let id = resource.id();
        let name_key = match T::KEYS {
            KeyShape::IdAndName => resource.name().map(str::to_lowercase),
            KeyShape::Id => None,
        };

        self.by_id.insert(id, Arc::clone(&resource));
        if let Some(key) = name_key {
            self.by_name.insert(key, resource);
        }
    }

    pub(crate) fn get(&self, id: i32) -> Option<Arc<T>> {
        self.by_id.get(&id)
    }

    /// Case-insensitive lookup. Stale index entries are pruned on the way.
    pub(crate) fn get_by_name(&self, name: &str) -> Option<Arc<T>> {
        let key = name.to_lowercase();
        let indexed = self.by_name.get(&key).map(|entry| Arc::clone(entry.value()))?;

        match self.by_id.get(&indexed.id()) {
            Some(live) if Arc::ptr_eq(&live, &indexed) => Some(live),
            // Concurrent stores of one id can leave the index one instance behind.
            Some(live) if live.name().is_some_and(|n| n.to_lowercase() == key) => {
                self.by_name.insert(key, Arc::clone(&live));
                Some(live)
            }
            _ => {
                unindex(&self.by_name, &indexed);
                None
            }
        }
    }

    pub(crate) fn contains(&self, id: i32) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Number of live entries, after flushing pending maintenance.
    pub(crate) fn entry_count(&self) -> u64 {
        self.by_id.run_pending_tasks();
        self.by_id.entry_count()
    }

    #[cfg(test)]
    fn name_count(&self) -> usize {
        self.by_id.run_pending_tasks();
        self.by_name.len()
    }
}

/// Drop the index entry of `resource`, if the index still points at it.
fn unindex<T: Resource>(names: &DashMap<String, Arc<T>>, resource: &Arc<T>) {
    if let Some(name) = resource.name() {
        names.remove_if(&name.to_lowercase(), |_, indexed| Arc::ptr_eq(indexed, resource));
    }
}

impl<T: Resource> std::fmt::Debug for Region<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Region")
            .field("type", &T::API_ENDPOINT)
            .field("entry_count", &self.by_id.entry_count())
            .field("name_count", &self.by_name.len())
            .finish()
    }
}
