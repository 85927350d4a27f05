//! Key-value cache with per-entry TTLs.
//!
//! Writers invalidate the keys they make stale; nothing is versioned, so readers may
//! see an old value until its TTL runs out if an invalidation is missed.

use dashmap::DashMap;
use jiff::{SignedDuration, Timestamp};
use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

/// String-keyed cache store.
pub trait CacheStore: Send + Sync {
    /// Fetch a live entry.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key` for `ttl`. Non-positive TTLs store nothing.
    fn put(&self, key: &str, value: String, ttl: SignedDuration);

    /// Drop a single entry.
    fn forget(&self, key: &str);

    /// Drop every entry in `keys`.
    fn invalidate(&self, keys: &[String]) {
        for key in keys {
            self.forget(key);
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Timestamp,
}

/// Process-local cache store.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<String, Entry>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CacheStore for MemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        let now = Timestamp::now();

        let expired = match self.entries.get(key) {
            Some(entry) if entry.expires_at > now => return Some(entry.value.clone()),
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.remove_if(key, |_, entry| entry.expires_at <= now);
        }

        None
    }

    fn put(&self, key: &str, value: String, ttl: SignedDuration) {
        if !ttl.is_positive() {
            return;
        }

        let expires_at = Timestamp::now()
            .checked_add(ttl)
            .unwrap_or(Timestamp::MAX);

        self.entries
            .insert(key.to_string(), Entry { value, expires_at });
    }

    fn forget(&self, key: &str) {
        self.entries.remove(key);
    }
}

/// Read and decode a JSON entry. Undecodable entries count as misses.
pub fn get_json<T: DeserializeOwned>(store: &dyn CacheStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(source) => {
            warn!(key, "discarding undecodable cache entry: {source}");

            store.forget(key);

            None
        }
    }
}

/// Encode `value` as JSON and store it.
pub fn put_json<T: Serialize>(store: &dyn CacheStore, key: &str, value: &T, ttl: SignedDuration) {
    match serde_json::to_string(value) {
        Ok(raw) => store.put(key, raw, ttl),
        Err(source) => warn!(key, "failed to encode cache entry: {source}"),
    }
}

/// Cache key builders.
pub mod keys {
    use storefront::tables::ProductTable;

    use crate::domain::{products::records::ProductId, users::UserId};

    #[must_use]
    pub fn cart_summary(user: UserId) -> String {
        format!("cart:summary:{user}")
    }

    #[must_use]
    pub fn product(table: ProductTable, product: ProductId) -> String {
        format!("products:{table}:{product}")
    }
}
