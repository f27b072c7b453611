use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Envelope every backend endpoint answers with: `{ success, data, message }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Missing `success` is treated as success; only an explicit `false` fails
    #[serde(default = "default_success")]
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

/// Why an envelope could not be turned into data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    #[error("{0}")]
    Rejected(String),
    #[error("response has no data")]
    MissingData,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Unwraps `data`, turning `success: false` into a rejection
    pub fn into_data(self) -> Result<T, EnvelopeError> {
        if !self.success {
            return Err(EnvelopeError::Rejected(
                self.message
                    .unwrap_or_else(|| "Request was rejected".to_string()),
            ));
        }
        self.data.ok_or(EnvelopeError::MissingData)
    }

    /// Like `into_data` but for endpoints where only the message matters
    pub fn into_message(self) -> Result<Option<String>, EnvelopeError> {
        if !self.success {
            return Err(EnvelopeError::Rejected(
                self.message
                    .unwrap_or_else(|| "Request was rejected".to_string()),
            ));
        }
        Ok(self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_yields_data() {
        let resp: ApiResponse<Vec<String>> =
            serde_json::from_str(r#"{"success":true,"data":["a","b"],"message":"ok"}"#).unwrap();
        assert_eq!(resp.into_data().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_missing_success_flag_counts_as_success() {
        let resp: ApiResponse<u32> = serde_json::from_str(r#"{"data":5}"#).unwrap();
        assert_eq!(resp.into_data().unwrap(), 5);
    }

    #[test]
    fn test_explicit_failure_carries_message() {
        let resp: ApiResponse<u32> =
            serde_json::from_str(r#"{"success":false,"message":"Category ID already exists"}"#)
                .unwrap();
        assert_eq!(
            resp.into_data().unwrap_err(),
            EnvelopeError::Rejected("Category ID already exists".into())
        );
    }

    #[test]
    fn test_success_without_data() {
        let resp: ApiResponse<u32> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(resp.clone().into_data().unwrap_err(), EnvelopeError::MissingData);
        assert_eq!(resp.into_message().unwrap(), None);
    }

    #[test]
    fn test_delete_message_passes_through() {
        let resp: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"success":true,"data":null,"message":"Deleted"}"#).unwrap();
        assert_eq!(resp.into_message().unwrap().as_deref(), Some("Deleted"));
    }
}
