//! Configuration module for the resource cache.
//!
//! Loads [`CacheOptions`] from environment variables:
//!
//! - `POKECACHE_TTL` - default absolute expiration
//! - `POKECACHE_TTI` - default sliding expiration
//! - `POKECACHE_TTL_<ENDPOINT>` / `POKECACHE_TTI_<ENDPOINT>` - per-kind overrides,
//!   e.g. `POKECACHE_TTL_POKEMON_SPECIES=1d`
//!
//! Values use `<n><unit>` (`s m h d w`); `none` disables that expiration.

use std::collections::{BTreeMap, HashMap};
use std::env;

use tracing::warn;

use crate::cache::{CacheExpirationOptions, CacheOptions};
use crate::utils::parse_expiration;

const PREFIX: &str = "POKECACHE_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Absolute,
    Sliding,
}

/// Load cache options from the environment, reading `.env` first if present.
pub fn from_env() -> CacheOptions {
    dotenvy::dotenv().ok();
    // Non-UTF-8 variables cannot be ours.
    from_vars(
        env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
    )
}

/// Build cache options from `(name, value)` pairs.
///
/// Unrelated variables are skipped; malformed values are ignored with a warning.
pub fn from_vars<I, K, V>(vars: I) -> CacheOptions
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut default = CacheExpirationOptions::default();
    // Sorted so overrides are applied deterministically.
    let mut overrides: BTreeMap<String, Vec<(Field, Option<std::time::Duration>)>> =
        BTreeMap::new();

    for (key, value) in vars {
        let (key, value) = (key.as_ref(), value.as_ref());
        let Some(rest) = key.strip_prefix(PREFIX) else {
            continue;
        };
        let (field, endpoint) = match rest.split_once('_') {
            Some(("TTL", endpoint)) => (Field::Absolute, Some(endpoint)),
            Some(("TTI", endpoint)) => (Field::Sliding, Some(endpoint)),
            None if rest == "TTL" => (Field::Absolute, None),
            None if rest == "TTI" => (Field::Sliding, None),
            _ => continue,
        };

        let Some(setting) = parse_expiration(value) else {
            warn!("Ignoring {}: invalid expiration '{}'", key, value);
            continue;
        };

        match endpoint {
            None => apply(&mut default, field, setting),
            Some(endpoint) if !endpoint.is_empty() => {
                let endpoint = endpoint.to_lowercase().replace('_', "-");
                overrides.entry(endpoint).or_default().push((field, setting));
            }
            Some(_) => warn!("Ignoring {}: missing endpoint", key),
        }
    }

    let mut per_type = HashMap::with_capacity(overrides.len());
    for (endpoint, settings) in overrides {
        let mut options = default;
        for (field, setting) in settings {
            apply(&mut options, field, setting);
        }
        per_type.insert(endpoint, options);
    }

    CacheOptions {
        default_expiration: default,
        per_type,
    }
}

fn apply(options: &mut CacheExpirationOptions, field: Field, setting: Option<std::time::Duration>) {
    match field {
        Field::Absolute => options.absolute_expiration = setting,
        Field::Sliding => options.sliding_expiration = setting,
    }
}
