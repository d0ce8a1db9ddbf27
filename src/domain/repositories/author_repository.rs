//! Repository trait for author storage.

use crate::domain::entities::{Author, AuthorUpdate, NewAuthor};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for the author entity store.
///
/// Pages are ordered most-recently-updated first (ties broken by id), and the
/// list cache relies on every implementation agreeing on that order.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAuthorRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryAuthorRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_author.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Inserts a new author. The store assigns the id and both timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_author: NewAuthor) -> Result<Author, AppError>;

    /// Finds an author by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no row matches.
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: Uuid) -> Result<Author, AppError>;

    /// Returns up to `limit` authors after skipping `offset` rows.
    ///
    /// An out-of-range window yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Author>, AppError>;

    /// Replaces all mutable fields of the author identified by `update.id`
    /// and refreshes its `updated_at`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Author))` with the stored row after the update
    /// - `Ok(None)` if no row has that id
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, update: AuthorUpdate) -> Result<Option<Author>, AppError>;

    /// Hard-deletes an author.
    ///
    /// Returns `true` if a row was removed. A missing row is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    async fn health_check(&self) -> Result<(), AppError>;
}
