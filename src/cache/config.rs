//! Cache configuration.

use std::collections::HashMap;
use std::time::Duration;

use crate::models::{Resource, ResourceType};

/// How long a stored resource stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheExpirationOptions {
    /// Maximum lifetime of an entry, counted from its last write.
    pub absolute_expiration: Option<Duration>,

    /// Entries are dropped if not read within this duration.
    pub sliding_expiration: Option<Duration>,
}

impl Default for CacheExpirationOptions {
    fn default() -> Self {
        Self {
            absolute_expiration: Some(Duration::from_secs(3600)), // 1 hour
            sliding_expiration: None,
        }
    }
}

impl CacheExpirationOptions {
    /// Options under which entries never expire.
    pub fn never() -> Self {
        Self {
            absolute_expiration: None,
            sliding_expiration: None,
        }
    }

    /// Set the absolute expiration (builder pattern).
    #[must_use]
    pub fn absolute(mut self, duration: Duration) -> Self {
        self.absolute_expiration = Some(duration);
        self
    }

    /// Set the sliding expiration (builder pattern).
    #[must_use]
    pub fn sliding(mut self, duration: Duration) -> Self {
        self.sliding_expiration = Some(duration);
        self
    }

    /// Disable absolute expiration.
    #[must_use]
    pub fn no_absolute(mut self) -> Self {
        self.absolute_expiration = None;
        self
    }

    /// Whether entries under these options can expire at all.
    pub fn expires(&self) -> bool {
        self.absolute_expiration.is_some() || self.sliding_expiration.is_some()
    }

    /// Lifetime of a freshly written entry.
    pub(crate) fn on_write(&self) -> Option<Duration> {
        min_deadline(self.absolute_expiration, self.sliding_expiration)
    }

    /// Remaining lifetime of an entry read `age` after its last write.
    ///
    /// `current` is the remaining lifetime before the read.
    pub(crate) fn on_read(&self, age: Duration, current: Option<Duration>) -> Option<Duration> {
        let Some(sliding) = self.sliding_expiration else {
            return current;
        };
        let absolute_left = self
            .absolute_expiration
            .map(|absolute| absolute.saturating_sub(age));
        min_deadline(absolute_left, Some(sliding))
    }
}

fn min_deadline(a: Option<Duration>, b: Option<Duration>) -> Option<Duration> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Initial expiration policy of a cache manager.
///
/// Kinds without an override in `per_type` use `default_expiration`.
/// Overrides are keyed by API endpoint (`"berry"`, `"pokemon-species"`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheOptions {
    pub default_expiration: CacheExpirationOptions,
    pub per_type: HashMap<String, CacheExpirationOptions>,
}

impl CacheOptions {
    /// Set the fallback policy (builder pattern).
    #[must_use]
    pub fn default_expiration(mut self, options: CacheExpirationOptions) -> Self {
        self.default_expiration = options;
        self
    }

    /// Override the policy of one endpoint.
    #[must_use]
    pub fn expiration_for(
        mut self,
        endpoint: impl Into<String>,
        options: CacheExpirationOptions,
    ) -> Self {
        self.per_type.insert(endpoint.into(), options);
        self
    }

    /// Override the policy of `T`.
    #[must_use]
    pub fn expiration_for_type<T: Resource>(self, options: CacheExpirationOptions) -> Self {
        let endpoint = ResourceType::of::<T>().endpoint();
        self.expiration_for(endpoint, options)
    }

    /// Policy that applies to `endpoint` under these options.
    pub fn resolve(&self, endpoint: &str) -> CacheExpirationOptions {
        self.per_type
            .get(endpoint)
            .copied()
            .unwrap_or(self.default_expiration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Berry;

    #[test]
    fn test_write_lifetime_takes_earliest_deadline() {
        let both = CacheExpirationOptions::never()
            .absolute(Duration::from_secs(60))
            .sliding(Duration::from_secs(10));
        assert_eq!(both.on_write(), Some(Duration::from_secs(10)));
        assert_eq!(CacheExpirationOptions::never().on_write(), None);
        assert!(!CacheExpirationOptions::never().expires());
    }

    #[test]
    fn test_read_extends_sliding_but_not_past_absolute() {
        let opts = CacheExpirationOptions::never()
            .absolute(Duration::from_secs(60))
            .sliding(Duration::from_secs(10));

        // Early read: full sliding window.
        assert_eq!(
            opts.on_read(Duration::from_secs(5), Some(Duration::from_secs(2))),
            Some(Duration::from_secs(10))
        );
        // Late read: capped by the absolute deadline.
        assert_eq!(
            opts.on_read(Duration::from_secs(55), Some(Duration::from_secs(2))),
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn test_read_keeps_absolute_only_deadline() {
        let opts = CacheExpirationOptions::never().absolute(Duration::from_secs(60));
        let current = Some(Duration::from_secs(42));
        assert_eq!(opts.on_read(Duration::from_secs(18), current), current);
    }

    #[test]
    fn test_no_absolute_keeps_sliding_only() {
        let opts = CacheExpirationOptions::default()
            .sliding(Duration::from_secs(30))
            .no_absolute();

        assert_eq!(opts.absolute_expiration, None);
        assert_eq!(opts.on_write(), Some(Duration::from_secs(30)));
        assert!(CacheExpirationOptions::default().no_absolute().on_write().is_none());
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let short = CacheExpirationOptions::never().absolute(Duration::from_secs(5));
        let options = CacheOptions::default()
            .default_expiration(CacheExpirationOptions::never())
            .expiration_for_type::<Berry>(short);

        assert_eq!(options.resolve("berry"), short);
        assert_eq!(options.resolve("pokedex"), CacheExpirationOptions::never());
    }
}
