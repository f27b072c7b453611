//! Backend access: envelope-aware HTTP client and the entity API seam

pub mod client;
pub mod entity_api;
pub mod error;
pub mod local_entity_api;
pub mod multipart;
pub mod source_api;

pub use client::ApiClient;
pub use entity_api::{BodyEncoding, EntityApi, RestEntityApi};
pub use error::ApiError;
pub use local_entity_api::LocalEntityApi;
pub use source_api::SourceApi;
