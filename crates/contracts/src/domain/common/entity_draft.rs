use serde::Serialize;

use super::EntityRecord;
use crate::shared::validation::ValidationError;

/// The in-progress, locally edited copy of an entity
///
/// `Default` gives the fixed empty values of a create form.
pub trait EntityDraft: Clone + Default {
    type Record: EntityRecord;
    type Payload: Serialize + Clone;

    /// Field-by-field copy of an existing record for the edit form
    fn from_record(record: &Self::Record) -> Self;

    /// Validates and converts to the request body
    fn to_payload(&self) -> Result<Self::Payload, ValidationError>;

    fn validate(&self) -> Result<(), ValidationError> {
        self.to_payload().map(|_| ())
    }

    // ============================================================================
    // Uploaded images (entities without images keep the defaults)
    // ============================================================================

    fn image_urls(&self) -> &[String] {
        &[]
    }

    fn push_image_url(&mut self, _url: String) {}

    fn remove_image_url(&mut self, _index: usize) -> Option<String> {
        None
    }
}
