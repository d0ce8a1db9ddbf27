//! DTOs for author endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /author/v1/create`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAuthorRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(length(min = 2, max = 100))]
    pub bio: String,

    /// `YYYY-MM-DD`; format is checked by the service.
    #[validate(length(min = 1, message = "birth_date is required"))]
    pub birth_date: String,
}

/// Body of `PUT /author/v1/update`.
///
/// Every field is replaced. An absent or empty `death_date` clears it.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAuthorRequest {
    #[validate(length(min = 1, message = "id is required"))]
    pub id: String,

    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(length(min = 2, max = 100))]
    pub bio: String,

    #[validate(length(min = 1, message = "birth_date is required"))]
    pub birth_date: String,

    #[serde(default)]
    pub death_date: Option<String>,
}

/// Plain acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn success() -> Self {
        Self {
            message: "success".to_string(),
        }
    }
}
