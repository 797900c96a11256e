//! Errors produced when talking to the remote API.

use thiserror::Error;

use tienda_core::session::SessionError;

use crate::envelope::ErrorDetail;

/// Errors that can occur when calling the storefront API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed (connect, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status without a parseable error envelope.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Truncated response body for diagnostics.
        body: String,
    },

    /// The API reported a business error in its envelope.
    #[error("API error {}: {}", .0.code, .0.message)]
    Api(ErrorDetail),

    /// Response body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A success envelope arrived without a data payload.
    #[error("response for {0} has no data")]
    MissingData(String),

    /// Session state could not be read or written.
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    /// A request path could not be joined onto the base URL.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// Whether the remote rejected the request as unauthenticated.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::Api(detail) => detail.status == 401,
            Self::Status { status, .. } => *status == 401,
            _ => false,
        }
    }
}

impl From<tienda_core::session::StoreError> for ApiError {
    fn from(err: tienda_core::session::StoreError) -> Self {
        Self::Session(SessionError::Store(err))
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Api(ErrorDetail {
            code: "ORDER_NOT_FOUND".to_string(),
            message: "order does not exist".to_string(),
            status: 404,
        });
        assert_eq!(err.to_string(), "API error ORDER_NOT_FOUND: order does not exist");

        let err = ApiError::MissingData("/api/me".to_string());
        assert_eq!(err.to_string(), "response for /api/me has no data");
    }

    #[test]
    fn test_is_unauthorized() {
        let denied = ApiError::Api(ErrorDetail {
            code: "UNAUTHENTICATED".to_string(),
            message: "token rejected".to_string(),
            status: 401,
        });
        assert!(denied.is_unauthorized());

        let missing = ApiError::Status {
            status: 401,
            body: String::new(),
        };
        assert!(missing.is_unauthorized());

        let other = ApiError::MissingData("/api/cart".to_string());
        assert!(!other.is_unauthorized());
    }
}
