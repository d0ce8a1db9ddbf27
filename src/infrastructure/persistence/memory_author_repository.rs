//! In-memory implementation of the author repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Author, AuthorUpdate, NewAuthor};
use crate::domain::repositories::AuthorRepository;
use crate::error::AppError;

/// Author store backed by a `HashMap`, for tests and database-less runs.
///
/// Mirrors the PostgreSQL ordering (`updated_at DESC, id DESC`) so pages are
/// interchangeable with cached ones.
#[derive(Debug, Clone, Default)]
pub struct MemoryAuthorRepository {
    authors: Arc<RwLock<HashMap<Uuid, Author>>>,
}

impl MemoryAuthorRepository {
    /// Creates a new empty memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `authors`.
    pub fn with_data(authors: Vec<Author>) -> Self {
        Self {
            authors: Arc::new(RwLock::new(
                authors.into_iter().map(|a| (a.id, a)).collect(),
            )),
        }
    }

    /// Number of stored authors.
    pub async fn len(&self) -> usize {
        self.authors.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl AuthorRepository for MemoryAuthorRepository {
    async fn insert(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        let now = Utc::now();
        let author = Author::new(
            Uuid::new_v4(),
            new_author.name,
            new_author.bio,
            new_author.birth_date,
            None,
            now,
            now,
        );

        self.authors.write().await.insert(author.id, author.clone());
        Ok(author)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Author, AppError> {
        self.authors
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::author_not_found(id))
    }

    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Author>, AppError> {
        let authors = self.authors.read().await;

        let mut ordered: Vec<&Author> = authors.values().collect();
        ordered.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let skip = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
        let take = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);

        Ok(ordered.into_iter().skip(skip).take(take).cloned().collect())
    }

    async fn update(&self, update: AuthorUpdate) -> Result<Option<Author>, AppError> {
        let mut authors = self.authors.write().await;

        let Some(author) = authors.get_mut(&update.id) else {
            return Ok(None);
        };

        author.name = update.name;
        author.bio = update.bio;
        author.birth_date = update.birth_date;
        author.death_date = update.death_date;
        author.updated_at = Utc::now();

        Ok(Some(author.clone()))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.authors.write().await.remove(&id).is_some())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
