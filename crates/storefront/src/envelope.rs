//! Response envelope shared by every endpoint of the remote API.

use serde::Deserialize;

use crate::error::ApiError;

/// Business-error details carried inside the envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// HTTP status the server associated with the error.
    pub status: u16,
}

/// The `{ success, path, data, error, timestamp }` wrapper.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// Whether the call succeeded.
    pub success: bool,
    /// Request path echoed by the server.
    #[serde(default)]
    pub path: Option<String>,
    /// Payload, present on success.
    pub data: Option<T>,
    /// Error details, present on failure.
    #[serde(default)]
    pub error: Option<ErrorDetail>,
    /// Server-side timestamp (ISO instant).
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload or convert the envelope error.
    ///
    /// # Errors
    ///
    /// `ApiError::Api` when the envelope carries an error,
    /// `ApiError::MissingData` when a success envelope has no payload.
    pub fn into_data(self) -> Result<T, ApiError> {
        if let Some(error) = self.error {
            return Err(ApiError::Api(error));
        }
        match self.data {
            Some(data) if self.success => Ok(data),
            _ => Err(ApiError::MissingData(
                self.path.unwrap_or_else(|| "<unknown path>".to_string()),
            )),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let json = r#"{
            "success": true,
            "path": "/api/products/1",
            "data": {"value": 7},
            "error": null,
            "timestamp": "2024-03-01T10:00:00Z"
        }"#;

        #[derive(Debug, Deserialize, PartialEq)]
        struct Payload {
            value: i32,
        }

        let envelope: Envelope<Payload> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_data().unwrap(), Payload { value: 7 });
    }

    #[test]
    fn test_error_envelope() {
        let json = r#"{
            "success": false,
            "path": "/api/orders/XX",
            "data": null,
            "error": {"code": "ORDER_NOT_FOUND", "message": "no such order", "status": 404},
            "timestamp": "2024-03-01T10:00:00Z"
        }"#;

        let envelope: Envelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        match envelope.into_data() {
            Err(ApiError::Api(detail)) => {
                assert_eq!(detail.code, "ORDER_NOT_FOUND");
                assert_eq!(detail.status, 404);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_success_without_data() {
        let json = r#"{"success": true, "path": "/api/me", "data": null}"#;
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(matches!(
            envelope.into_data(),
            Err(ApiError::MissingData(path)) if path == "/api/me"
        ));
    }
}
