//! Bookkeeping for image uploads sent to object storage through the backend

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UploadTaskId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Queued,
    Uploading,
    Done,
    Failed,
}

/// One selected file on its way to object storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadTask {
    pub id: UploadTaskId,
    pub file_name: String,
    pub status: UploadStatus,
    pub result_url: Option<String>,
    pub error: Option<String>,
}

impl UploadTask {
    pub fn queued(id: UploadTaskId, file_name: impl Into<String>) -> Self {
        Self {
            id,
            file_name: file_name.into(),
            status: UploadStatus::Queued,
            result_url: None,
            error: None,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.status, UploadStatus::Done | UploadStatus::Failed)
    }
}

/// Outcome of uploading a single file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UploadResult {
    Uploaded { source_file: String, url: String },
    Failed { source_file: String, error: String },
}

impl UploadResult {
    pub fn from_outcome(source_file: impl Into<String>, outcome: Result<String, String>) -> Self {
        let source_file = source_file.into();
        match outcome {
            Ok(url) => Self::Uploaded { source_file, url },
            Err(error) => Self::Failed { source_file, error },
        }
    }

    pub fn source_file(&self) -> &str {
        match self {
            Self::Uploaded { source_file, .. } | Self::Failed { source_file, .. } => source_file,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Uploaded { url, .. } => Some(url),
            Self::Failed { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Uploaded { .. })
    }

    /// Message shown to the user when the upload failed
    pub fn failure_message(&self) -> Option<String> {
        match self {
            Self::Failed { source_file, error } => {
                Some(format!("Failed to upload \"{source_file}\": {error}"))
            }
            Self::Uploaded { .. } => None,
        }
    }
}

/// `data` of `POST /product/upload-image`
pub type UploadedUrls = Vec<String>;
