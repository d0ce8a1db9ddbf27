//! Token validation over gRPC.

use async_trait::async_trait;
use serde_json::json;
use tonic::Code;
use tonic::transport::{Channel, Endpoint};

use crate::domain::identity::{TokenData, TokenValidator};
use crate::error::AppError;
use crate::proto::token::v1::{
    TokenRequest, TokenResponse, token_validation_client::TokenValidationClient,
};

const SUCCESS_MESSAGE: &str = "success";

/// [`TokenValidator`] backed by the identity service's `TokenValidation` RPC.
///
/// The channel connects lazily, so the author service starts even while the
/// identity service is down; requests fail with 500 until it comes up.
#[derive(Clone)]
pub struct GrpcTokenValidator {
    client: TokenValidationClient<Channel>,
}

impl GrpcTokenValidator {
    /// Creates a validator for the identity service at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `url` is not a valid endpoint URI.
    pub fn connect_lazy(url: &str) -> Result<Self, tonic::transport::Error> {
        let channel = Endpoint::from_shared(url.to_string())?.connect_lazy();
        Ok(Self {
            client: TokenValidationClient::new(channel),
        })
    }
}

#[async_trait]
impl TokenValidator for GrpcTokenValidator {
    #[tracing::instrument(skip_all)]
    async fn validate_token(&self, token: &str) -> Result<TokenData, AppError> {
        let mut client = self.client.clone();

        let response = client
            .validate_token(TokenRequest {
                token: token.to_string(),
            })
            .await
            .map_err(|status| match status.code() {
                Code::Unauthenticated
                | Code::PermissionDenied
                | Code::InvalidArgument
                | Code::NotFound => AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": status.message() }),
                ),
                _ => {
                    tracing::error!("Token validation call failed: {}", status);
                    AppError::from(status)
                }
            })?
            .into_inner();

        into_token_data(response)
    }
}

fn into_token_data(response: TokenResponse) -> Result<TokenData, AppError> {
    if response.message != SUCCESS_MESSAGE {
        return Err(AppError::unauthorized(
            "Unauthorized",
            json!({ "reason": response.message }),
        ));
    }

    let data = response.data.ok_or_else(|| {
        AppError::unauthorized(
            "Unauthorized",
            json!({ "reason": "identity service returned no user data" }),
        )
    })?;

    Ok(TokenData {
        user_id: data.user_id,
        username: data.username,
        full_name: data.full_name,
        email: data.email,
        role: data.role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::token::v1::UserData;

    #[test]
    fn test_success_response_maps_user() {
        let response = TokenResponse {
            message: "success".to_string(),
            data: Some(UserData {
                user_id: 42,
                username: "librarian".to_string(),
                full_name: "Head Librarian".to_string(),
                email: "librarian@example.com".to_string(),
                role: "Admin".to_string(),
            }),
        };

        let data = into_token_data(response).unwrap();
        assert_eq!(data.user_id, 42);
        assert_eq!(data.role, "Admin");
    }

    #[test]
    fn test_non_success_message_is_unauthorized() {
        let response = TokenResponse {
            message: "token expired".to_string(),
            data: None,
        };

        let err = into_token_data(response).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_missing_data_is_unauthorized() {
        let response = TokenResponse {
            message: "success".to_string(),
            data: None,
        };

        assert!(matches!(
            into_token_data(response),
            Err(AppError::Unauthorized { .. })
        ));
    }

    #[tokio::test]
    async fn test_invalid_endpoint_is_rejected() {
        assert!(GrpcTokenValidator::connect_lazy("not a uri").is_err());
    }
}
