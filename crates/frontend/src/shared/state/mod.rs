//! Client-side state of list and form screens.
//!
//! The stores are plain structs with command/query methods; screens keep them
//! in signals and drive them through [`StateCell`].

pub mod form_store;
pub mod list_store;
pub mod state_cell;

pub use form_store::{FormMode, FormStore, SubmitError};
pub use list_store::{ListController, ListStore};
pub use state_cell::StateCell;
