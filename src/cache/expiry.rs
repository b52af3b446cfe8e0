//! Expiration policy shared by every region of a manager.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use moka::Expiry;
use parking_lot::RwLock;

use super::{CacheExpirationOptions, CacheOptions};

/// Active expiration options: a default plus per-endpoint overrides.
///
/// Regions consult this on every write and read, so changes take effect
/// without rebuilding any cache.
#[derive(Debug)]
pub(crate) struct ExpirationPolicy {
    default: RwLock<CacheExpirationOptions>,
    overrides: DashMap<String, CacheExpirationOptions>,
}

impl ExpirationPolicy {
    pub(crate) fn new(options: &CacheOptions) -> Self {
        let overrides = DashMap::with_capacity(options.per_type.len());
        for (endpoint, expiration) in &options.per_type {
            overrides.insert(endpoint.clone(), *expiration);
        }
        Self {
            default: RwLock::new(options.default_expiration),
            overrides,
        }
    }

    pub(crate) fn resolve(&self, endpoint: &str) -> CacheExpirationOptions {
        match self.overrides.get(endpoint) {
            Some(options) => *options,
            None => *self.default.read(),
        }
    }

    pub(crate) fn default_options(&self) -> CacheExpirationOptions {
        *self.default.read()
    }

    pub(crate) fn set_default(&self, options: CacheExpirationOptions) {
        *self.default.write() = options;
    }

    pub(crate) fn set_override(&self, endpoint: &str, options: CacheExpirationOptions) {
        self.overrides.insert(endpoint.to_string(), options);
    }

    /// Returns `true` if an override existed.
    pub(crate) fn remove_override(&self, endpoint: &str) -> bool {
        self.overrides.remove(endpoint).is_some()
    }
}

/// Per-entry expiry of one region, resolved against the live policy.
#[derive(Debug, Clone)]
pub(crate) struct RegionExpiry {
    endpoint: &'static str,
    policy: Arc<ExpirationPolicy>,
}

impl RegionExpiry {
    pub(crate) fn new(endpoint: &'static str, policy: Arc<ExpirationPolicy>) -> Self {
        Self { endpoint, policy }
    }

    fn options(&self) -> CacheExpirationOptions {
        self.policy.resolve(self.endpoint)
    }
}

impl<K, V> Expiry<K, V> for RegionExpiry {
    fn expire_after_create(&self, _key: &K, _value: &V, _created_at: Instant) -> Option<Duration> {
        self.options().on_write()
    }

    fn expire_after_read(
        &self,
        _key: &K,
        _value: &V,
        read_at: Instant,
        duration_until_expiry: Option<Duration>,
        last_modified_at: Instant,
    ) -> Option<Duration> {
        let age = read_at.saturating_duration_since(last_modified_at);
        self.options().on_read(age, duration_until_expiry)
    }

    // Overwrites restart the entry's lifetime.
    fn expire_after_update(
        &self,
        _key: &K,
        _value: &V,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        self.options().on_write()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_shadow_default() {
        let berry = CacheExpirationOptions::never().absolute(Duration::from_secs(1));
        let policy = ExpirationPolicy::new(&CacheOptions::default().expiration_for("berry", berry));

        assert_eq!(policy.resolve("berry"), berry);
        assert_eq!(policy.resolve("pokemon"), CacheExpirationOptions::default());

        assert!(policy.remove_override("berry"));
        assert!(!policy.remove_override("berry"));
        assert_eq!(policy.resolve("berry"), CacheExpirationOptions::default());
    }

    #[test]
    fn test_region_expiry_sees_default_changes() {
        let policy = Arc::new(ExpirationPolicy::new(&CacheOptions::default()));
        let expiry = RegionExpiry::new("pokedex", Arc::clone(&policy));
        let now = Instant::now();

        assert_eq!(
            Expiry::<i32, ()>::expire_after_create(&expiry, &1, &(), now),
            Some(Duration::from_secs(3600))
        );

        policy.set_default(CacheExpirationOptions::never());
        assert_eq!(
            Expiry::<i32, ()>::expire_after_create(&expiry, &1, &(), now),
            None
        );
    }
}
