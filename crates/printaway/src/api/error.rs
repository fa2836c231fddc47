//! Backend error normalization.
//!
//! Error bodies from the backend come in three shapes: a plain string, a
//! JSON object with a `message` field, or nothing useful at all. They are
//! normalized into one tagged enum so callers branch on variants instead of
//! sniffing response bodies.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The requested resource does not exist (HTTP 404).
    #[error("Resource not found")]
    NotFound,

    /// The backend rejected the request with a structured failure.
    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// The backend could not be reached, or the connection failed mid-flight.
    #[error("Network error: {0}")]
    Network(String),

    /// The response arrived but could not be decoded into the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Normalizes a non-success HTTP response into an error variant.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 404 {
            return ApiError::NotFound;
        }
        ApiError::Backend {
            status,
            message: extract_error_message(body, "Unknown error"),
        }
    }

    /// The human-readable detail of this error, without the variant prefix.
    pub fn detail(&self) -> String {
        match self {
            ApiError::NotFound => "Resource not found".to_string(),
            ApiError::Backend { message, .. } => message.clone(),
            ApiError::Network(message) | ApiError::Decode(message) => message.clone(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Pulls a displayable message out of an error body.
///
/// Accepts a JSON object with a `message` field, a JSON string, or a bare
/// text body; falls back to the given default when the body is empty.
pub fn extract_error_message(body: &str, fallback: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
        if let Some(message) = value.as_str() {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_404_maps_to_not_found() {
        let err = ApiError::from_status(404, "");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_backend_error_with_message_object() {
        let err = ApiError::from_status(400, r#"{"message":"Reference code already used"}"#);
        match err {
            ApiError::Backend { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Reference code already used");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_backend_error_with_string_body() {
        let err = ApiError::from_status(500, "database unavailable");
        assert_eq!(err.detail(), "database unavailable");
    }

    #[test]
    fn test_backend_error_with_json_string_body() {
        let err = ApiError::from_status(500, r#""out of paper""#);
        assert_eq!(err.detail(), "out of paper");
    }

    #[test]
    fn test_backend_error_empty_body_falls_back() {
        let err = ApiError::from_status(502, "  ");
        assert_eq!(err.detail(), "Unknown error");
    }

    #[test]
    fn test_not_found_distinct_from_network() {
        let not_found = ApiError::from_status(404, "");
        let network = ApiError::Network("connection refused".to_string());
        assert!(not_found.is_not_found() && !not_found.is_network());
        assert!(network.is_network() && !network.is_not_found());
    }

    #[test]
    fn test_extract_error_message_ignores_non_string_message() {
        assert_eq!(
            extract_error_message(r#"{"message":42}"#, "fallback"),
            r#"{"message":42}"#
        );
    }
}
