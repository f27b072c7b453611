use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityDraft, EntityRecord};
use crate::shared::validation::{require_identifier, require_text, split_ids, ValidationError};

// ============================================================================
// Record
// ============================================================================

/// Curated product collection (seasonal lines, bridal sets, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(rename = "_id")]
    pub id: String,

    pub collection_id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub image_urls: Vec<String>,

    /// Ids of the products in the collection
    #[serde(default)]
    pub products: Vec<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl EntityRecord for Collection {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "collection"
    }

    fn element_name() -> &'static str {
        "Collection"
    }

    fn list_name() -> &'static str {
        "Collections"
    }
}

// ============================================================================
// Form / payload
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPayload {
    pub collection_id: String,
    pub name: String,
    pub description: String,
    pub image_urls: Vec<String>,
    pub products: Vec<String>,
}

/// Images already stored on the record are kept apart from new uploads;
/// the payload sends existing ones first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionDraft {
    pub collection_id: String,
    pub name: String,
    pub description: String,
    pub existing_image_urls: Vec<String>,
    pub image_urls: Vec<String>,
    /// Comma separated ids as typed
    pub products: String,
}

impl CollectionDraft {
    pub fn remove_existing_image(&mut self, index: usize) -> Option<String> {
        (index < self.existing_image_urls.len()).then(|| self.existing_image_urls.remove(index))
    }

    pub fn all_image_urls(&self) -> Vec<String> {
        self.existing_image_urls
            .iter()
            .chain(self.image_urls.iter())
            .cloned()
            .collect()
    }
}

impl EntityDraft for CollectionDraft {
    type Record = Collection;
    type Payload = CollectionPayload;

    fn from_record(record: &Collection) -> Self {
        Self {
            collection_id: record.collection_id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            existing_image_urls: record.image_urls.clone(),
            image_urls: Vec::new(),
            products: record.products.join(", "),
        }
    }

    fn to_payload(&self) -> Result<CollectionPayload, ValidationError> {
        require_identifier("collection_id", "Collection ID", &self.collection_id)?;
        require_text("name", "Name", &self.name)?;

        Ok(CollectionPayload {
            collection_id: self.collection_id.trim().to_string(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            image_urls: self.all_image_urls(),
            products: split_ids(&self.products),
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

    fn record() -> Collection {
        Collection {
            id: "c1".into(),
            collection_id: "SPRING-24".into(),
            name: "Spring".into(),
            description: String::new(),
            image_urls: vec!["https://cdn/a.jpg".into(), "https://cdn/b.jpg".into()],
            products: vec![],
            created_at: None,
        }
    }

    #[test]
    fn test_edit_copies_existing_images() {
        let original = record();
        let mut draft = CollectionDraft::from_record(&original);
        assert_eq!(draft.existing_image_urls, original.image_urls);
        assert!(draft.image_urls.is_empty());

        draft.remove_existing_image(0);
        draft.existing_image_urls.push("https://cdn/z.jpg".into());
        assert_eq!(original.image_urls.len(), 2);
        assert_eq!(original.image_urls[0], "https://cdn/a.jpg");
    }

    #[test]
    fn test_payload_puts_existing_images_first() {
        let mut draft = CollectionDraft::from_record(&record());
        draft.push_image_url("https://cdn/new.jpg".into());
        let payload = draft.to_payload().unwrap();
        assert_eq!(
            payload.image_urls,
            vec!["https://cdn/a.jpg", "https://cdn/b.jpg", "https://cdn/new.jpg"]
        );
    }

    #[test]
    fn test_collection_list_endpoint_shape() {
        let json = r#"[{"_id":"x","collectionId":"C","name":"N","products":["p1"]}]"#;
        let list: Vec<Collection> = serde_json::from_str(json).unwrap();
        assert_eq!(list[0].products, vec!["p1"]);
        assert!(list[0].image_urls.is_empty());
    }
}
