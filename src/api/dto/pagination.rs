//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DefaultOnError, DisplayFromStr, serde_as};

use crate::application::services::author_service::{DEFAULT_LIMIT, DEFAULT_PAGE};

/// Pagination query parameters for the author list.
///
/// Parsing is lenient: a value that is not an integer is treated as absent
/// instead of rejecting the request.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub page: Option<i64>,

    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub limit: Option<i64>,
}

impl PaginationParams {
    /// Returns `(page, limit)` with defaults applied.
    ///
    /// # Defaults
    ///
    /// - `page`: 1 when absent, unparsable or non-positive
    /// - `limit`: 10 when absent, unparsable or non-positive
    pub fn resolve(&self) -> (i64, i64) {
        let page = self.page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE);
        let limit = self.limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT);
        (page, limit)
    }
}
