//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService, page_key};
use crate::domain::entities::Author;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info, warn};

/// Redis cache for author list pages.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection reuse.
/// All operations are fail-open: errors are logged but don't propagate to callers.
pub struct RedisCache {
    client: ConnectionManager,
    ttl_seconds: u64,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `ttl_seconds` - Lifetime of every cached page; controlled via
    ///   `LIST_CACHE_TTL_SECONDS`
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            ttl_seconds,
        })
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_page(&self, limit: i64, offset: i64) -> CacheResult<Option<Vec<Author>>> {
        let key = page_key(limit, offset);
        let mut conn = self.client.clone();

        let raw = match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("Cache MISS: {}", key);
                return Ok(None);
            }
            Err(e) => {
                warn!("Redis GET error for {}: {}", key, e);
                return Ok(None);
            }
        };

        match serde_json::from_str::<Vec<Author>>(&raw) {
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

        let payload = match serde_json::to_string(page) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to encode page {} for caching: {}", key, e);
                return Ok(());
            }
        };

        let mut conn = self.client.clone();
        match conn
            .set_ex::<_, _, ()>(&key, payload, self.ttl_seconds)
            .await
        {
            Ok(_) => {
                debug!("Cache SET: {} (TTL: {}s)", key, self.ttl_seconds);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", key, e);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
