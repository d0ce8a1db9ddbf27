//! In-process cache with LRU eviction and a fixed TTL.
//!
//! Pages are stored as serialized JSON, like in Redis, so a cached page is
//! an independent snapshot of the rows it was built from.

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::service::{CacheResult, CacheService, page_key};
use crate::domain::entities::Author;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    /// `None` when the TTL is too large to represent; the entry never expires.
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }
}

/// LRU-bounded page cache living in the service process.
///
/// Used when Redis is not configured or unreachable at startup. Expired
/// entries are dropped lazily on access.
#[derive(Debug)]
pub struct MemoryCache {
    store: Mutex<LruCache<String, CacheEntry>>,
    ttl: Duration,
}

impl MemoryCache {
    /// Creates a cache holding at most `max_entries` pages for `ttl` each.
    ///
    /// A zero `max_entries` is treated as one.
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            store: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    /// Number of stored entries, including expired ones not yet evicted.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_page(&self, limit: i64, offset: i64) -> CacheResult<Option<Vec<Author>>> {
        let key = page_key(limit, offset);
        let mut store = self.store.lock().await;

        let value = match store.get(&key) {
            Some(entry) if entry.is_expired() => {
                store.pop(&key);
                debug!("Cache EXPIRED: {}", key);
                return Ok(None);
            }
            Some(entry) => entry.value.clone(),
            None => {
                debug!("Cache MISS: {}", key);
                return Ok(None);
            }
        };
        drop(store);

        match serde_json::from_slice::<Vec<Author>>(&value) {
            Ok(page) => {
                debug!("Cache HIT: {} ({} authors)", key, page.len());
                Ok(Some(page))
            }
            Err(e) => {
                warn!("Failed to decode cached page {}: {}", key, e);
                Ok(None)
            }
        }
    }

    async fn put_page(&self, limit: i64, offset: i64, page: &[Author]) -> CacheResult<()> {
        let key = page_key(limit, offset);

        let value = match serde_json::to_vec(page) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to encode page {} for caching: {}", key, e);
                return Ok(());
            }
        };

        let entry = CacheEntry {
            value,
            expires_at: Instant::now().checked_add(self.ttl),
        };
        self.store.lock().await.put(key.clone(), entry);
        debug!("Cache SET: {} (TTL: {}s)", key, self.ttl.as_secs());

        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn author(name: &str) -> Author {
        let now = Utc::now();
        Author::new(
            Uuid::new_v4(),
            name.to_string(),
            "Writer".to_string(),
            NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
            None,
            now,
            now,
        )
    }

    #[tokio::test]
    async fn test_miss_then_hit() {
        let cache = MemoryCache::new(16, Duration::from_secs(300));
        assert!(cache.get_page(10, 0).await.unwrap().is_none());

        let page = vec![author("Jane Doe"), author("John Roe")];
        cache.put_page(10, 0, &page).await.unwrap();

        let cached = cache.get_page(10, 0).await.unwrap().unwrap();
        assert_eq!(cached, page);
    }

    #[tokio::test]
    async fn test_keys_do_not_collide() {
        let cache = MemoryCache::new(16, Duration::from_secs(300));
        cache.put_page(10, 0, &[author("First")]).await.unwrap();

        assert!(cache.get_page(10, 10).await.unwrap().is_none());
        assert!(cache.get_page(5, 0).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_entry_is_a_miss() {
        let cache = MemoryCache::new(16, Duration::ZERO);
        cache.put_page(10, 0, &[author("Ephemeral")]).await.unwrap();

        assert!(cache.get_page(10, 0).await.unwrap().is_none());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_expired_entry_counts_until_accessed() {
        let cache = MemoryCache::new(16, Duration::ZERO);
        cache.put_page(10, 0, &[author("Stale")]).await.unwrap();
        assert_eq!(cache.len().await, 1);

        assert!(cache.get_page(10, 0).await.unwrap().is_none());
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test]
    async fn test_unrepresentable_ttl_never_expires() {
        let cache = MemoryCache::new(16, Duration::MAX);
        let page = vec![author("Long Lived")];
        cache.put_page(10, 0, &page).await.unwrap();

        assert_eq!(cache.get_page(10, 0).await.unwrap(), Some(page));
    }

    #[tokio::test]
    async fn test_lru_eviction() {
        let cache = MemoryCache::new(1, Duration::from_secs(300));
        cache.put_page(10, 0, &[author("Old")]).await.unwrap();
        cache.put_page(10, 10, &[author("New")]).await.unwrap();

        assert!(cache.get_page(10, 0).await.unwrap().is_none());
        assert!(cache.get_page(10, 10).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_a_miss() {
        let cache = MemoryCache::new(4, Duration::from_secs(300));
        cache.store.lock().await.put(
            page_key(10, 0),
            CacheEntry {
                value: b"{not json".to_vec(),
                expires_at: Instant::now().checked_add(Duration::from_secs(300)),
            },
        );

        assert!(cache.get_page(10, 0).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_page_is_cached() {
        let cache = MemoryCache::new(4, Duration::from_secs(300));
        cache.put_page(10, 1000, &[]).await.unwrap();

        assert_eq!(cache.get_page(10, 1000).await.unwrap(), Some(vec![]));
    }
}
