//! Author CRUD orchestration over the entity store and the list cache.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::{Author, AuthorUpdate, NewAuthor};
use crate::domain::repositories::AuthorRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::date::{format_date, format_optional_date, parse_date, parse_optional_date};

/// Page number used when the caller gives none or a non-positive one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the caller gives none or a non-positive one.
pub const DEFAULT_LIMIT: i64 = 10;

/// Wire representation of an author with dates rendered as `YYYY-MM-DD`.
///
/// An unset death date is rendered as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorDetail {
    pub id: Uuid,
    pub name: String,
    pub bio: String,
    pub birth_date: String,
    pub death_date: String,
}

impl From<Author> for AuthorDetail {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
            bio: author.bio,
            birth_date: format_date(author.birth_date),
            death_date: format_optional_date(author.death_date),
        }
    }
}

/// Echo of the requested window. No total count is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: i64,
    pub limit: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorPage {
    pub author_list: Vec<AuthorDetail>,
    pub pagination: PageInfo,
}

/// Service for creating, reading, updating and deleting authors.
///
/// Only the paged list goes through the cache. Writes never invalidate it,
/// so a cached page can lag the store by up to one TTL.
pub struct AuthorService {
    repository: Arc<dyn AuthorRepository>,
    cache: Arc<dyn CacheService>,
}

impl AuthorService {
    pub fn new(repository: Arc<dyn AuthorRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    /// Creates an author from wire text.
    ///
    /// No duplicate detection is done: two identical requests create two
    /// authors.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidDateFormat`] if `birth_date` is not
    /// `YYYY-MM-DD`; the store is not touched in that case.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_author(
        &self,
        name: String,
        bio: String,
        birth_date: &str,
    ) -> Result<AuthorDetail, AppError> {
        let birth_date = parse_date("birth_date", birth_date)?;

        let author = self
            .repository
            .insert(NewAuthor {
                name,
                bio,
                birth_date,
            })
            .await?;

        tracing::info!(author_id = %author.id, "Author created");
        Ok(author.into())
    }

    /// Returns one author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no author has `id`.
    pub async fn get_detail_author(&self, id: Uuid) -> Result<AuthorDetail, AppError> {
        self.repository.find_by_id(id).await.map(AuthorDetail::from)
    }

    /// Returns one page of authors, most recently updated first.
    ///
    /// `page_index` is 1-based. Non-positive arguments fall back to
    /// [`DEFAULT_PAGE`] and [`DEFAULT_LIMIT`].
    ///
    /// # Cache
    ///
    /// The cache is consulted first. On a miss the page is read from the
    /// store and written back to the cache by a detached task, so the
    /// response never waits on the cache write.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors. Cache faults are
    /// treated as misses.
    pub async fn get_list_author(
        &self,
        page_size: i64,
        page_index: i64,
    ) -> Result<AuthorPage, AppError> {
        let limit = if page_size > 0 { page_size } else { DEFAULT_LIMIT };
        let page = if page_index > 0 { page_index } else { DEFAULT_PAGE };
        let offset = (page - 1).saturating_mul(limit);

        let authors = match self.cache.get_page(limit, offset).await {
            Ok(Some(cached)) => {
                tracing::debug!(limit, offset, "Author page cache hit");
                cached
            }
            Ok(None) => self.load_page(limit, offset).await?,
            Err(e) => {
                tracing::warn!(error = %e, limit, offset, "Author page cache read failed");
                self.load_page(limit, offset).await?
            }
        };

        Ok(AuthorPage {
            author_list: authors.into_iter().map(AuthorDetail::from).collect(),
            pagination: PageInfo { page, limit },
        })
    }

    async fn load_page(&self, limit: i64, offset: i64) -> Result<Vec<Author>, AppError> {
        tracing::debug!(limit, offset, "Author page cache miss");
        let authors = self.repository.find_page(limit, offset).await?;

        let cache = Arc::clone(&self.cache);
        let snapshot = authors.clone();
        tokio::spawn(async move {
            if let Err(e) = cache.put_page(limit, offset, &snapshot).await {
                tracing::warn!(error = %e, limit, offset, "Failed to populate author page cache");
            }
        });

        Ok(authors)
    }

    /// Replaces every mutable field of an author.
    ///
    /// An empty `death_date` clears the stored death date.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist, including
    /// when it is deleted between the existence check and the write.
    /// Returns [`AppError::InvalidDateFormat`] if either date is malformed;
    /// nothing is written in that case.
    pub async fn update_author(
        &self,
        id: Uuid,
        name: String,
        bio: String,
        birth_date: &str,
        death_date: &str,
    ) -> Result<AuthorDetail, AppError> {
        self.repository.find_by_id(id).await?;

        let birth_date = parse_date("birth_date", birth_date)?;
        let death_date = parse_optional_date("death_date", death_date)?;

        let updated = self
            .repository
            .update(AuthorUpdate {
                id,
                name,
                bio,
                birth_date,
                death_date,
            })
            .await?
            .ok_or_else(|| AppError::author_not_found(id))?;

        tracing::info!(author_id = %id, "Author updated");
        Ok(updated.into())
    }

    /// Hard-deletes an author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist or was
    /// already removed by a concurrent delete.
    pub async fn delete_author(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.find_by_id(id).await?;

        if !self.repository.delete_by_id(id).await? {
            return Err(AppError::author_not_found(id));
        }

        tracing::info!(author_id = %id, "Author deleted");
        Ok(())
    }

    /// Checks that the entity store answers queries.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.repository.health_check().await
    }
}
