//! Author identifier parsing.

use serde_json::json;
use uuid::Uuid;

use crate::error::AppError;

/// Parses a textual author id.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the id is empty or not a UUID.
pub fn parse_author_id(raw: &str) -> Result<Uuid, AppError> {
    if raw.is_empty() {
        return Err(AppError::bad_request(
            "param id is required",
            json!({ "field": "id" }),
        ));
    }

    Uuid::parse_str(raw).map_err(|_| {
        AppError::bad_request("id is not valid uuid", json!({ "field": "id", "value": raw }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_author_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_empty_id() {
        let err = parse_author_id("").unwrap_err();
        assert_eq!(err.to_string(), "param id is required");
    }

    #[test]
    fn test_parse_invalid_uuid() {
        let err = parse_author_id("not-a-uuid").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "id is not valid uuid");
    }
}
