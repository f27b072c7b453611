use contracts::shared::api_response::{ApiResponse, EnvelopeError};
use thiserror::Error;

use crate::shared::storage::StorageError;

/// Everything that can go wrong talking to the backend (or the demo store)
///
/// Validation errors never get here: drafts are checked before any request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never got a response
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx status or `success: false`
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Response arrived but could not be understood
    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApiError {
    pub fn not_found(what: &str) -> Self {
        ApiError::Rejected {
            status: 404,
            message: format!("{what} not found"),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Builds the rejection for a non-2xx response, preferring the body's `message`
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(body)
            .ok()
            .and_then(|r| r.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| default_status_message(status));
        ApiError::Rejected { status, message }
    }

    /// `success: false` inside a 2xx response
    pub fn from_envelope(status: u16, err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::Rejected(message) => ApiError::Rejected { status, message },
            EnvelopeError::MissingData => ApiError::Decode(err.to_string()),
        }
    }
}

fn default_status_message(status: u16) -> String {
    match status {
        400 => "Bad request".to_string(),
        401 => "Session expired, please sign in again".to_string(),
        403 => "You do not have access to this action".to_string(),
        404 => "Not found".to_string(),
        409 => "Conflicts with an existing record".to_string(),
        500..=599 => format!("Server error (HTTP {status})"),
        _ => format!("HTTP {status}"),
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        ApiError::Storage(e.to_string())
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_uses_body_message() {
        let err = ApiError::from_status(409, r#"{"success":false,"message":"Category ID exists"}"#);
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 409,
                message: "Category ID exists".into()
            }
        );
        assert_eq!(err.to_string(), "Category ID exists");
    }

    #[test]
    fn test_rejection_without_json_body_falls_back() {
        let err = ApiError::from_status(502, "<html>Bad gateway</html>");
        assert_eq!(err.to_string(), "Server error (HTTP 502)");
        let err = ApiError::from_status(401, r#"{"message":"  "}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Session expired, please sign in again");
    }

    #[test]
    fn test_envelope_errors_map() {
        assert_eq!(
            ApiError::from_envelope(200, EnvelopeError::Rejected("nope".into())).status(),
            Some(200)
        );
        assert!(matches!(
            ApiError::from_envelope(200, EnvelopeError::MissingData),
            ApiError::Decode(_)
        ));
    }

    #[test]
    fn test_network_error_display() {
        assert_eq!(
            ApiError::Network("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
    }
}
