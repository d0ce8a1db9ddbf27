//! Authentication service for API token validation.

use std::sync::Arc;

use serde_json::json;

use crate::domain::identity::{TokenData, TokenValidator};
use crate::error::AppError;

/// Service for authenticating API requests via Bearer tokens.
///
/// Token checks are delegated to the identity service; this service only
/// decides whether the returned role may use the author API.
pub struct AuthService {
    validator: Arc<dyn TokenValidator>,
}

impl AuthService {
    pub fn new(validator: Arc<dyn TokenValidator>) -> Self {
        Self { validator }
    }

    /// Authenticates a raw token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the identity service rejects the
    /// token.
    /// Returns [`AppError::Forbidden`] if the role is neither `User` nor
    /// `Admin`.
    /// Returns [`AppError::Internal`] if the identity service is unreachable.
    pub async fn authenticate(&self, token: &str) -> Result<TokenData, AppError> {
        let data = self.validator.validate_token(token).await?;

        if !data.has_catalog_role() {
            tracing::warn!(user_id = data.user_id, role = %data.role, "Role not allowed");
            return Err(AppError::forbidden(
                "you do not have permission to access this endpoint",
                json!({ "role": data.role }),
            ));
        }

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identity::MockTokenValidator;

    fn token_data(role: &str) -> TokenData {
        TokenData {
            user_id: 1,
            username: "reader".to_string(),
            full_name: "Avid Reader".to_string(),
            email: "reader@example.com".to_string(),
            role: role.to_string(),
        }
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let mut validator = MockTokenValidator::new();
        validator
            .expect_validate_token()
            .withf(|token| token == "valid-token")
            .times(1)
            .returning(|_| Ok(token_data("Admin")));

        let service = AuthService::new(Arc::new(validator));
        let data = service.authenticate("valid-token").await.unwrap();

        assert_eq!(data.role, "Admin");
    }

    #[tokio::test]
    async fn test_authenticate_invalid_token() {
        let mut validator = MockTokenValidator::new();
        validator.expect_validate_token().returning(|_| {
            Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "token expired" }),
            ))
        });

        let service = AuthService::new(Arc::new(validator));
        let result = service.authenticate("stale-token").await;

        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[tokio::test]
    async fn test_authenticate_wrong_role_is_forbidden() {
        let mut validator = MockTokenValidator::new();
        validator
            .expect_validate_token()
            .returning(|_| Ok(token_data("Guest")));

        let service = AuthService::new(Arc::new(validator));
        let result = service.authenticate("guest-token").await;

        assert!(matches!(result, Err(AppError::Forbidden { .. })));
    }
}
