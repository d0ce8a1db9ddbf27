//! Application error taxonomy shared by the HTTP and gRPC surfaces.
//!
//! Every failure is an [`AppError`]. The HTTP layer renders it through
//! [`IntoResponse`] as `{"error": {"code", "message", "details"}}` and the gRPC
//! layer converts it into a [`tonic::Status`] with the matching code.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use tonic::{Code, Status};
use uuid::Uuid;

/// JSON envelope for error responses.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error description.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed body, parameters or failed field validation.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Date text that does not match `YYYY-MM-DD`.
    #[error("{message}")]
    InvalidDateFormat { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Reserved for duplicate detection; not raised by author creation.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    #[error("{message}")]
    Unauthorized { message: String, details: Value },

    #[error("{message}")]
    Forbidden { message: String, details: Value },

    /// Storage, cache or upstream fault that has no better classification.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn invalid_date_format(field: &str, value: &str) -> Self {
        Self::InvalidDateFormat {
            message: "invalid format date".to_string(),
            details: json!({ "field": field, "value": value, "expected": "YYYY-MM-DD" }),
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn author_not_found(id: Uuid) -> Self {
        Self::not_found("author not found", json!({ "id": id }))
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }

    pub fn forbidden(message: impl Into<String>, details: Value) -> Self {
        Self::Forbidden {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable code string used in both the JSON body and logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::InvalidDateFormat { .. } => "invalid_date_format",
            Self::NotFound { .. } => "not_found",
            Self::Conflict { .. } => "already_exists",
            Self::Unauthorized { .. } => "unauthorized",
            Self::Forbidden { .. } => "forbidden",
            Self::Internal { .. } => "internal_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::InvalidDateFormat { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = self.parts();
        ErrorInfo {
            code: self.code(),
            message: message.clone(),
            details: details.clone(),
        }
    }

    fn parts(&self) -> (&String, &Value) {
        match self {
            Self::Validation { message, details }
            | Self::InvalidDateFormat { message, details }
            | Self::NotFound { message, details }
            | Self::Conflict { message, details }
            | Self::Unauthorized { message, details }
            | Self::Forbidden { message, details }
            | Self::Internal { message, details } => (message, details),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.code(), details = %self.parts().1, "{}", self);
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        let code = match &err {
            AppError::Validation { .. } | AppError::InvalidDateFormat { .. } => {
                Code::InvalidArgument
            }
            AppError::NotFound { .. } => Code::NotFound,
            AppError::Conflict { .. } => Code::AlreadyExists,
            AppError::Unauthorized { .. } => Code::Unauthenticated,
            AppError::Forbidden { .. } => Code::PermissionDenied,
            AppError::Internal { .. } => {
                tracing::error!("internal service error: {}", err);
                Code::Internal
            }
        };
        Status::new(code, err.to_string())
    }
}

impl From<Status> for AppError {
    fn from(status: Status) -> Self {
        let details = json!({ "grpc_code": format!("{:?}", status.code()) });
        let message = status.message().to_string();
        match status.code() {
            Code::InvalidArgument => AppError::bad_request(message, details),
            Code::NotFound => AppError::not_found(message, details),
            Code::AlreadyExists => AppError::conflict(message, details),
            Code::Unauthenticated => AppError::unauthorized(message, details),
            Code::PermissionDenied => AppError::forbidden(message, details),
            _ => AppError::internal("Upstream service error", details),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "author already exist",
                json!({ "constraint": db.constraint() }),
            );
        }

        AppError::internal("Database error", json!({ "reason": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request("Validation failed", json!(errors))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "failed to parse request",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::bad_request("x", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::invalid_date_format("birth_date", "nope").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::author_not_found(Uuid::nil()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::conflict("x", json!({})).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::forbidden("x", json!({})).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::internal("x", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_date_message() {
        let err = AppError::invalid_date_format("birth_date", "not-a-date");
        assert_eq!(err.to_string(), "invalid format date");
        assert_eq!(err.code(), "invalid_date_format");
    }

    #[test]
    fn test_unauthorized_response_has_challenge_header() {
        let response = AppError::unauthorized("Unauthorized", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_grpc_status_mapping() {
        let status: Status = AppError::author_not_found(Uuid::nil()).into();
        assert_eq!(status.code(), Code::NotFound);
        assert_eq!(status.message(), "author not found");

        let status: Status = AppError::bad_request("bad", json!({})).into();
        assert_eq!(status.code(), Code::InvalidArgument);

        let status: Status = AppError::unauthorized("no", json!({})).into();
        assert_eq!(status.code(), Code::Unauthenticated);

        let status: Status = AppError::internal("boom", json!({})).into();
        assert_eq!(status.code(), Code::Internal);
    }

    #[test]
    fn test_upstream_status_mapping() {
        let err: AppError = Status::unauthenticated("token expired").into();
        assert!(matches!(err, AppError::Unauthorized { .. }));
        assert_eq!(err.to_string(), "token expired");

        let err: AppError = Status::unavailable("connection refused").into();
        assert!(matches!(err, AppError::Internal { .. }));
        assert_eq!(err.to_string(), "Upstream service error");
    }

    #[test]
    fn test_row_not_found_is_internal() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
