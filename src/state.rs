//! Shared state handed to every HTTP handler.

use std::sync::Arc;

use crate::application::services::{AuthService, AuthorService};
use crate::infrastructure::cache::CacheService;

/// Application state cloned into each request.
///
/// The cache is held here as well as inside [`AuthorService`] so the health
/// check can report on it directly.
#[derive(Clone)]
pub struct AppState {
    pub author_service: Arc<AuthorService>,
    pub auth_service: Arc<AuthService>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    pub fn new(
        author_service: Arc<AuthorService>,
        auth_service: Arc<AuthService>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            author_service,
            auth_service,
            cache,
        }
    }
}
