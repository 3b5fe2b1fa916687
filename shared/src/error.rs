//! Error type shared by every API client.

use serde_json::Value;
use thiserror::Error;

/// Failure of one call against the feedback API.
///
/// Callers log the detail and show the user a generic notification; nothing
/// branches on the variant beyond that.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// The service answered with a non-2xx status.
    #[error("HTTP error: {status}")]
    Http {
        /// Response status code.
        status: u16,
    },
    /// The body was not the JSON we expected.
    #[error("Parse error: {0}")]
    Parse(String),
    /// The request body could not be encoded.
    #[error("Serialize error: {0}")]
    Serialize(String),
    /// The service answered with an empty or `null` body.
    #[error("empty response body")]
    EmptyResponse,
}

impl ApiError {
    /// Maps a status code to `Ok(())` for 2xx and [`ApiError::Http`]
    /// otherwise.
    pub fn check_status(status: u16) -> Result<(), ApiError> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(ApiError::Http {
                status,
            })
        }
    }

    /// Accepts the decoded reply of a write call. `null` (which also stands
    /// for an empty body) and `false` mean the service did not store
    /// anything.
    pub fn require_body(value: Value) -> Result<Value, ApiError> {
        match value {
            Value::Null | Value::Bool(false) => Err(ApiError::EmptyResponse),
            value => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::ApiError;

    #[test]
    fn check_status_accepts_only_2xx() {
        assert_eq!(ApiError::check_status(200), Ok(()));
        assert_eq!(ApiError::check_status(204), Ok(()));
        assert_eq!(
            ApiError::check_status(401),
            Err(ApiError::Http {
                status: 401
            })
        );
        assert_eq!(
            ApiError::check_status(500).map_err(|err| err.to_string()),
            Err("HTTP error: 500".to_string())
        );
    }

    #[test]
    fn require_body_rejects_null_and_false_only() {
        assert_eq!(ApiError::require_body(Value::Null), Err(ApiError::EmptyResponse));
        assert_eq!(ApiError::require_body(json!(false)), Err(ApiError::EmptyResponse));
        assert_eq!(ApiError::require_body(json!({"id": 4})), Ok(json!({"id": 4})));
        assert_eq!(ApiError::require_body(json!(true)), Ok(json!(true)));
    }
}
