use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityDraft, EntityRecord, FromPayload};
use crate::shared::validation::{require_http_url, require_text, ValidationError};

/// Blog article. `content` is produced by the embedded rich-text editor and
/// stored as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl EntityRecord for BlogPost {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn collection_name() -> &'static str {
        "blogs"
    }

    fn element_name() -> &'static str {
        "Blog post"
    }

    fn list_name() -> &'static str {
        "Blog"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostPayload {
    pub title: String,
    pub author: String,
    pub thumbnail_url: Option<String>,
    pub content: String,
    pub published: bool,
}

impl FromPayload<BlogPostPayload> for BlogPost {
    fn from_payload(id: String, p: &BlogPostPayload) -> Self {
        Self {
            id,
            title: p.title.clone(),
            author: p.author.clone(),
            thumbnail_url: p.thumbnail_url.clone(),
            content: p.content.clone(),
            published: p.published,
            created_at: Some(Utc::now()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogPostDraft {
    pub title: String,
    pub author: String,
    pub thumbnail_url: String,
    pub content: String,
    pub published: bool,
}

impl EntityDraft for BlogPostDraft {
    type Record = BlogPost;
    type Payload = BlogPostPayload;

    fn from_record(record: &BlogPost) -> Self {
        Self {
            title: record.title.clone(),
            author: record.author.clone(),
            thumbnail_url: record.thumbnail_url.clone().unwrap_or_default(),
            content: record.content.clone(),
            published: record.published,
        }
    }

    fn to_payload(&self) -> Result<BlogPostPayload, ValidationError> {
        require_text("title", "Title", &self.title)?;
        require_text("content", "Content", &self.content)?;
        let thumbnail_url = if self.thumbnail_url.trim().is_empty() {
            None
        } else {
            require_http_url("thumbnail_url", "Thumbnail", &self.thumbnail_url)?;
            Some(self.thumbnail_url.trim().to_string())
        };

        Ok(BlogPostPayload {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            thumbnail_url,
            content: self.content.clone(),
            published: self.published,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_is_passed_through_untouched() {
        let draft = BlogPostDraft {
            title: "Caring for pearls".into(),
            content: "  <p>Keep them <b>dry</b></p>\n".into(),
            ..Default::default()
        };
        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.content, draft.content);
        assert_eq!(payload.thumbnail_url, None);
    }

    #[test]
    fn test_empty_content_is_rejected() {
        let draft = BlogPostDraft {
            title: "Draft".into(),
            ..Default::default()
        };
        assert_eq!(draft.validate().unwrap_err().field, "content");
    }
}
