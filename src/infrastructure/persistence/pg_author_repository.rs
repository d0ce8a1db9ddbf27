//! PostgreSQL implementation of the author repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Author, AuthorUpdate, NewAuthor};
use crate::domain::repositories::AuthorRepository;
use crate::error::AppError;

const AUTHOR_COLUMNS: &str = "id, name, bio, birth_date, death_date, created_at, updated_at";

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: Uuid,
    name: String,
    bio: String,
    birth_date: NaiveDate,
    death_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AuthorRow> for Author {
    fn from(r: AuthorRow) -> Self {
        Author::new(
            r.id,
            r.name,
            r.bio,
            r.birth_date,
            r.death_date,
            r.created_at,
            r.updated_at,
        )
    }
}

/// PostgreSQL repository for author storage.
///
/// Every operation is a single statement; there are no multi-statement
/// transactions. Updates are conditional on the id still existing.
pub struct PgAuthorRepository {
    pool: Arc<PgPool>,
}

impl PgAuthorRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for PgAuthorRepository {
    async fn insert(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        let row = sqlx::query_as::<_, AuthorRow>(&format!(
            r#"
            INSERT INTO authors (name, bio, birth_date)
            VALUES ($1, $2, $3)
            RETURNING {AUTHOR_COLUMNS}
            "#
        ))
        .bind(&new_author.name)
        .bind(&new_author.bio)
        .bind(new_author.birth_date)
        .fetch_one(self.pool.as_ref())
        .await
        .inspect_err(|e| tracing::error!("Failed to insert author: {}", e))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Author, AppError> {
        let row = sqlx::query_as::<_, AuthorRow>(&format!(
            r#"
            SELECT {AUTHOR_COLUMNS}
            FROM authors
            WHERE id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .inspect_err(|e| tracing::error!("Failed to find author {}: {}", id, e))?;

        row.map(Author::from)
            .ok_or_else(|| AppError::author_not_found(id))
    }

    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Author>, AppError> {
        let rows = sqlx::query_as::<_, AuthorRow>(&format!(
            r#"
            SELECT {AUTHOR_COLUMNS}
            FROM authors
            ORDER BY updated_at DESC, id DESC
            LIMIT $1
            OFFSET $2
            "#
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await
        .inspect_err(|e| tracing::error!("Failed to list authors: {}", e))?;

        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn update(&self, update: AuthorUpdate) -> Result<Option<Author>, AppError> {
        let row = sqlx::query_as::<_, AuthorRow>(&format!(
            r#"
            UPDATE authors SET
                name       = $2,
                bio        = $3,
                birth_date = $4,
                death_date = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {AUTHOR_COLUMNS}
            "#
        ))
        .bind(update.id)
        .bind(&update.name)
        .bind(&update.bio)
        .bind(update.birth_date)
        .bind(update.death_date)
        .fetch_optional(self.pool.as_ref())
        .await
        .inspect_err(|e| tracing::error!("Failed to update author {}: {}", update.id, e))?;

        Ok(row.map(Author::from))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .inspect_err(|e| tracing::error!("Failed to delete author {}: {}", id, e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
