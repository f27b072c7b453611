use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityDraft, EntityRecord};
use crate::shared::validation::{require_identifier, require_text, split_ids, ValidationError};

// ============================================================================
// Record
// ============================================================================

/// Product category (rings, necklaces, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,

    /// Business identifier, unique on the backend
    pub category_id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub image_urls: Vec<String>,

    /// Ids of child categories
    #[serde(default)]
    pub subcategories: Vec<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl EntityRecord for Category {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "category"
    }

    fn element_name() -> &'static str {
        "Category"
    }

    fn list_name() -> &'static str {
        "Categories"
    }
}

// ============================================================================
// Form / payload
// ============================================================================

/// Body of `POST /category` and `PUT /category/:id` (sent as multipart)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub category_id: String,
    pub name: String,
    pub description: String,
    pub image_urls: Vec<String>,
    pub subcategories: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryDraft {
    pub category_id: String,
    pub name: String,
    pub description: String,
    pub image_urls: Vec<String>,
    /// Comma separated ids as typed
    pub subcategories: String,
}

impl EntityDraft for CategoryDraft {
    type Record = Category;
    type Payload = CategoryPayload;

    fn from_record(record: &Category) -> Self {
        Self {
            category_id: record.category_id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            image_urls: record.image_urls.clone(),
            subcategories: record.subcategories.join(", "),
        }
    }

    fn to_payload(&self) -> Result<CategoryPayload, ValidationError> {
        require_identifier("category_id", "Category ID", &self.category_id)?;
        require_text("name", "Name", &self.name)?;

        Ok(CategoryPayload {
            category_id: self.category_id.trim().to_string(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            image_urls: self.image_urls.clone(),
            subcategories: split_ids(&self.subcategories),
        })
    }

    fn image_urls(&self) -> &[String] {
        &self.image_urls
    }

    fn push_image_url(&mut self, url: String) {
        self.image_urls.push(url);
    }

    fn remove_image_url(&mut self, index: usize) -> Option<String> {
        (index < self.image_urls.len()).then(|| self.image_urls.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Category {
        Category {
            id: "64f0c1".into(),
            category_id: "RINGS".into(),
            name: "Rings".into(),
            description: "Gold and silver rings".into(),
            image_urls: vec!["https://cdn/r1.jpg".into()],
            subcategories: vec!["a1".into(), "b2".into()],
            created_at: None,
        }
    }

    #[test]
    fn test_deserialize_backend_shape() {
        let json = r#"{"_id":"1","categoryId":"RINGS","name":"Rings","imageUrls":["u"]}"#;
        let c: Category = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, "1");
        assert_eq!(c.category_id, "RINGS");
        assert_eq!(c.image_urls, vec!["u"]);
        assert!(c.subcategories.is_empty());
        assert!(c.description.is_empty());
    }

    #[test]
    fn test_edit_draft_round_trips_subcategories() {
        let draft = CategoryDraft::from_record(&record());
        assert_eq!(draft.subcategories, "a1, b2");
        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.subcategories, vec!["a1", "b2"]);
        assert_eq!(payload.image_urls, vec!["https://cdn/r1.jpg"]);
    }

    #[test]
    fn test_validation_requires_identifier_and_name() {
        let mut draft = CategoryDraft::default();
        assert_eq!(draft.validate().unwrap_err().field, "category_id");
        draft.category_id = "RINGS".into();
        assert_eq!(draft.validate().unwrap_err().field, "name");
        draft.name = " Rings ".into();
        assert_eq!(draft.to_payload().unwrap().name, "Rings");
    }

    #[test]
    fn test_remove_image_out_of_range_is_none() {
        let mut draft = CategoryDraft::from_record(&record());
        assert_eq!(draft.remove_image_url(3), None);
        assert_eq!(draft.remove_image_url(0).as_deref(), Some("https://cdn/r1.jpg"));
        assert!(draft.image_urls.is_empty());
    }
}
