//! Domain entity representing a catalog author.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A book author stored in the catalog.
///
/// `death_date` is `None` while the author is alive or the date is unknown;
/// that state is never encoded as a sentinel date. The identifier and both
/// timestamps are assigned by the store.
///
/// Serializable so that list pages can be written to the cache verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub bio: String,
    pub birth_date: NaiveDate,
    pub death_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Author {
    /// Creates a new Author instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let author = Author::new(
    ///     Uuid::new_v4(),
    ///     "Jane Doe".to_string(),
    ///     "Writer".to_string(),
    ///     NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
    ///     None,
    ///     Utc::now(),
    ///     Utc::now(),
    /// );
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        name: String,
        bio: String,
        birth_date: NaiveDate,
        death_date: Option<NaiveDate>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            bio,
            birth_date,
            death_date,
            created_at,
            updated_at,
        }
    }
}

/// Input data for inserting a new author.
///
/// New authors never carry a death date; it can only be set by an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
    pub bio: String,
    pub birth_date: NaiveDate,
}

/// Full replacement of an author's mutable fields.
///
/// Unlike a patch, every field is written: `death_date: None` clears any
/// previously stored death date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorUpdate {
    pub id: Uuid,
    pub name: String,
    pub bio: String,
    pub birth_date: NaiveDate,
    pub death_date: Option<NaiveDate>,
}
