//! Image upload: the uploader seam, the sequential coordinator, and the
//! picker widget used by the category/collection/product forms.

pub mod coordinator;
pub mod picker;
pub mod uploader;

pub use coordinator::UploadCoordinator;
pub use picker::{ImageList, ImagePicker, UploadQueue};
pub use uploader::{ImageUploader, RestImageUploader, UploadSource};
