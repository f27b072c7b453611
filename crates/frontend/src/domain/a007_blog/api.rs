use contracts::domain::a007_blog::aggregate::{BlogPost, BlogPostPayload};

use crate::shared::api::{ApiClient, SourceApi};
use crate::shared::config::AppConfig;

pub type BlogApi = SourceApi<BlogPost, BlogPostPayload>;

pub fn blog_api(config: &AppConfig) -> BlogApi {
    SourceApi::for_source(config.blogs, ApiClient::from_session(config))
}
