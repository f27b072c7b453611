use async_trait::async_trait;
use contracts::shared::upload::UploadedUrls;

use crate::shared::api::multipart::file_form_data;
use crate::shared::api::{ApiClient, ApiError};
use crate::shared::config::AppConfig;

pub const UPLOAD_PATH: &str = "/product/upload-image";
pub const UPLOAD_FIELD: &str = "image";

/// Anything that can be uploaded and named in messages
pub trait UploadSource {
    fn file_name(&self) -> String;
}

impl UploadSource for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

/// Sends one file to object storage, returning its public URL
#[async_trait(?Send)]
pub trait ImageUploader {
    type File: UploadSource + 'static;

    async fn upload_image(&self, file: &Self::File) -> Result<String, ApiError>;
}

#[derive(Clone, Debug)]
pub struct RestImageUploader {
    client: ApiClient,
}

impl RestImageUploader {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Uploader authorized with the stored session token
    pub fn from_session(config: &AppConfig) -> Self {
        Self::new(ApiClient::from_session(config))
    }
}

#[async_trait(?Send)]
impl ImageUploader for RestImageUploader {
    type File = web_sys::File;

    async fn upload_image(&self, file: &web_sys::File) -> Result<String, ApiError> {
        let form = file_form_data(UPLOAD_FIELD, file)?;
        let urls: UploadedUrls = self.client.post_form(UPLOAD_PATH, form).await?;
        first_url(urls)
    }
}

/// The endpoint answers with a list; only the first URL is used
fn first_url(urls: UploadedUrls) -> Result<String, ApiError> {
    urls.into_iter()
        .next()
        .ok_or_else(|| ApiError::Decode("upload returned no URL".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_url_taken() {
        assert_eq!(
            first_url(vec!["https://cdn/a.jpg".into(), "https://cdn/b.jpg".into()]),
            Ok("https://cdn/a.jpg".to_string())
        );
    }

    #[test]
    fn test_empty_data_is_failure() {
        assert!(matches!(first_url(vec![]), Err(ApiError::Decode(_))));
    }
}
