//! Identity data returned by the external token-validation service.

use crate::error::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Role granted to regular catalog users.
pub const ROLE_USER: &str = "User";

/// Role granted to catalog administrators.
pub const ROLE_ADMIN: &str = "Admin";

/// Claims of a validated access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenData {
    pub user_id: i64,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub role: String,
}

impl TokenData {
    /// Returns true if the role may use the author API.
    pub fn has_catalog_role(&self) -> bool {
        self.role == ROLE_USER || self.role == ROLE_ADMIN
    }
}

/// Validates access tokens against the identity service.
///
/// # Implementations
///
/// - [`crate::infrastructure::identity::GrpcTokenValidator`] - gRPC client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Validates a raw token (without the `Bearer` prefix).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is rejected.
    /// Returns [`AppError::Internal`] if the identity service cannot be reached.
    async fn validate_token(&self, token: &str) -> Result<TokenData, AppError>;
}
