//! Envelope-aware HTTP client on top of `gloo-net`.
//!
//! Every call resolves the `{ success, data, message }` envelope and maps
//! failures into [`ApiError`]; callers only see typed data or an error.

use contracts::shared::api_response::ApiResponse;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use super::ApiError;
use crate::shared::config::{join_url, AppConfig};
use crate::system::auth::storage as session_storage;

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Client for the configured backend carrying the stored access token
    pub fn from_session(config: &AppConfig) -> Self {
        Self::new(config.api_base.clone()).with_token(session_storage::get_access_token())
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base, path)
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    // ============================================================================
    // Verbs
    // ============================================================================

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.authorize(Request::get(&self.url(path))).send().await?;
        read_data(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.authorize(Request::post(&self.url(path))).json(body)?;
        read_data(request.send().await?).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.authorize(Request::put(&self.url(path))).json(body)?;
        read_data(request.send().await?).await
    }

    /// The browser sets the multipart boundary; no Content-Type header here
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormData,
    ) -> Result<T, ApiError> {
        let request = self.authorize(Request::post(&self.url(path))).body(form)?;
        read_data(request.send().await?).await
    }

    pub async fn put_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormData,
    ) -> Result<T, ApiError> {
        let request = self.authorize(Request::put(&self.url(path))).body(form)?;
        read_data(request.send().await?).await
    }

    /// Returns the envelope message, if any
    pub async fn delete(&self, path: &str) -> Result<Option<String>, ApiError> {
        let response = self
            .authorize(Request::delete(&self.url(path)))
            .send()
            .await?;
        let status = response.status();
        let envelope = read_envelope::<serde_json::Value>(response).await?;
        envelope
            .into_message()
            .map_err(|e| ApiError::from_envelope(status, e))
    }
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<ApiResponse<T>, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    if !response.ok() {
        log::warn!("{} -> HTTP {}", response.url(), status);
        return Err(ApiError::from_status(status, &body));
    }
    if body.trim().is_empty() {
        return Ok(ApiResponse {
            success: true,
            data: None,
            message: None,
        });
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn read_data<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    read_envelope::<T>(response)
        .await?
        .into_data()
        .map_err(|e| ApiError::from_envelope(status, e))
}
