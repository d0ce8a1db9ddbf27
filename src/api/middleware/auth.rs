//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using Bearer tokens from Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract token from `Authorization` header
/// 2. Validate it with the identity service
/// 3. Check the returned role is `User` or `Admin`
/// 4. Store the [`TokenData`](crate::domain::identity::TokenData) in request extensions
/// 5. Continue to next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing
/// - Token format is invalid
/// - The identity service rejects the token
///
/// Returns `403 Forbidden` if the role is not allowed.
///
/// Adds `WWW-Authenticate: Bearer` header to 401 responses per RFC 6750.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|(_, reason)| {
            AppError::unauthorized("Unauthorized", serde_json::json!({ "reason": reason }))
        })?;

    let token_data = st.auth_service.authenticate(&token).await?;
    tracing::debug!(user_id = token_data.user_id, role = %token_data.role, "Request authenticated");

    parts.extensions.insert(token_data);
    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
