//! Reactive glue between the stores and the entity screens.
//!
//! Every entity list owns a [`ListViewModel`]; its create/edit modal owns a
//! [`FormViewModel`] and saves through the list, so the table only changes
//! from confirmed responses.

pub mod draft_images;
pub mod form_modal;
pub mod form_view_model;
pub mod list_toolbar;
pub mod list_view_model;

pub use draft_images::DraftImages;
pub use form_modal::open_form_modal;
pub use form_view_model::FormViewModel;
pub use list_toolbar::{ListToolbar, RowCheckbox, SelectAllCheckbox};
pub use list_view_model::{confirm, ListViewModel};
