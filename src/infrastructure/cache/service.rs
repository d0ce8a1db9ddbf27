//! Cache service trait and error types.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::Author;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Builds the cache key for a list page.
///
/// Only `limit` and `offset` participate: the list query has no filter or
/// sort dimension.
pub fn page_key(limit: i64, offset: i64) -> String {
    format!("authors:limit:{limit}:offset:{offset}")
}

/// Read-through cache for pages of the author list.
///
/// Entries expire after a fixed TTL and are never invalidated on writes, so
/// a page may be stale for up to one TTL window.
///
/// Implementations must be thread-safe and fail open: a cache fault is
/// logged and reported as a miss (on read) or ignored (on write).
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process LRU cache with TTL
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the cached page for `(limit, offset)`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(page))` on a hit that deserializes cleanly
    /// - `Ok(None)` on a miss, an expired entry, or an undecodable entry
    ///
    /// # Errors
    ///
    /// Should not return errors in production implementations.
    async fn get_page(&self, limit: i64, offset: i64) -> CacheResult<Option<Vec<Author>>>;

    /// Stores a page under `(limit, offset)` with the configured TTL.
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers.
    async fn put_page(&self, limit: i64, offset: i64, page: &[Author]) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Short backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_key_is_deterministic() {
        assert_eq!(page_key(10, 0), "authors:limit:10:offset:0");
        assert_eq!(page_key(10, 20), page_key(10, 20));
        assert_ne!(page_key(10, 20), page_key(20, 10));
    }
}
