use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityDraft, EntityRecord, FromPayload};
use crate::shared::validation::{parse_count, require_http_url, require_text, ValidationError};

/// Storefront banner slot (local demo data)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub image_url: String,
    #[serde(default)]
    pub link_url: Option<String>,
    /// Display order on the storefront, lower first
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub active: bool,
}

impl EntityRecord for Banner {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn collection_name() -> &'static str {
        "banners"
    }

    fn element_name() -> &'static str {
        "Banner"
    }

    fn list_name() -> &'static str {
        "Banners"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerPayload {
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub position: u32,
    pub active: bool,
}

impl FromPayload<BannerPayload> for Banner {
    fn from_payload(id: String, p: &BannerPayload) -> Self {
        Self {
            id,
            title: p.title.clone(),
            image_url: p.image_url.clone(),
            link_url: p.link_url.clone(),
            position: p.position,
            active: p.active,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BannerDraft {
    pub title: String,
    pub image_url: String,
    pub link_url: String,
    pub position: String,
    pub active: bool,
}

impl Default for BannerDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            image_url: String::new(),
            link_url: String::new(),
            position: "0".to_string(),
            active: true,
        }
    }
}

impl EntityDraft for BannerDraft {
    type Record = Banner;
    type Payload = BannerPayload;

    fn from_record(record: &Banner) -> Self {
        Self {
            title: record.title.clone(),
            image_url: record.image_url.clone(),
            link_url: record.link_url.clone().unwrap_or_default(),
            position: record.position.to_string(),
            active: record.active,
        }
    }

    fn to_payload(&self) -> Result<BannerPayload, ValidationError> {
        require_text("title", "Title", &self.title)?;
        require_http_url("image_url", "Image URL", &self.image_url)?;
        let link_url = if self.link_url.trim().is_empty() {
            None
        } else {
            require_http_url("link_url", "Link", &self.link_url)?;
            Some(self.link_url.trim().to_string())
        };
        let position = parse_count("position", "Position", &self.position)?;

        Ok(BannerPayload {
            title: self.title.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
            link_url,
            position,
            active: self.active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_is_optional_but_checked_when_present() {
        let mut draft = BannerDraft {
            title: "Summer sale".into(),
            image_url: "https://cdn/banner.jpg".into(),
            ..Default::default()
        };
        assert_eq!(draft.to_payload().unwrap().link_url, None);

        draft.link_url = "shop/sale".into();
        assert_eq!(draft.validate().unwrap_err().field, "link_url");

        draft.link_url = "https://shop.example/sale".into();
        assert_eq!(
            draft.to_payload().unwrap().link_url.as_deref(),
            Some("https://shop.example/sale")
        );
    }

    #[test]
    fn test_new_banner_defaults_active_first_position() {
        let draft = BannerDraft::default();
        assert!(draft.active);
        assert_eq!(draft.position, "0");
    }
}
