//! Common traits for all entities of the admin

pub mod entity_draft;
pub mod entity_record;

// Re-exports
pub use entity_draft::EntityDraft;
pub use entity_record::{new_local_id, EntityRecord, FromPayload};
